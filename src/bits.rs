//! Bit packing between the code stream and the 6-bit output alphabet.
//!
//! Bits fill each symbol from its most significant bit down. Codes are
//! written least significant bit first, so the reader and writer agree on
//! a plain bit order and only the code value is little-endian.

use crate::alphabet::{symbol_for, value_for};
use crate::error::DecompressError;

const SYMBOL_BITS: u8 = 6;

/// Accumulates bits and emits a symbol every six of them.
#[derive(Debug, Default)]
pub(crate) struct BitWriter {
    out: String,
    value: u8,
    position: u8,
}

impl BitWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push_bit(&mut self, bit: u32) {
        self.value = (self.value << 1) | (bit & 1) as u8;
        self.position += 1;
        if self.position == SYMBOL_BITS {
            self.out.push(symbol_for(self.value) as char);
            self.value = 0;
            self.position = 0;
        }
    }

    /// Writes the low `count` bits of `code`, least significant bit first.
    pub(crate) fn write_code(&mut self, code: u32, count: u32) {
        for i in 0..count {
            self.push_bit(code >> i);
        }
    }

    /// Writes the low `count` bits of `bits`, most significant bit first.
    pub(crate) fn write_msb_first(&mut self, bits: u32, count: u32) {
        for i in (0..count).rev() {
            self.push_bit(bits >> i);
        }
    }

    /// Pads with zero bits and returns the encoded text.
    ///
    /// At least one pad bit is always written, so an aligned stream gains a
    /// whole `A` symbol.
    pub(crate) fn finish(mut self) -> String {
        loop {
            self.push_bit(0);
            if self.position == 0 {
                return self.out;
            }
        }
    }
}

/// Reads bits back out of validated alphabet symbols.
#[derive(Debug)]
pub(crate) struct BitReader {
    values: Vec<u8>,
    index: usize,
    offset: u8,
}

impl BitReader {
    /// Decodes every symbol of `input` up front, rejecting anything outside
    /// the alphabet.
    pub(crate) fn new(input: &str) -> Result<Self, DecompressError> {
        if input.is_empty() {
            return Err(DecompressError::EmptyInput);
        }

        let values = input
            .char_indices()
            .map(|(position, character)| {
                u8::try_from(character)
                    .ok()
                    .and_then(value_for)
                    .ok_or(DecompressError::InvalidCharacter { character, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            values,
            index: 0,
            offset: 0,
        })
    }

    /// Number of bits consumed so far.
    pub(crate) fn bits_read(&self) -> usize {
        self.index * SYMBOL_BITS as usize + self.offset as usize
    }

    #[inline]
    fn read_bit(&mut self) -> Result<u32, DecompressError> {
        let Some(&value) = self.values.get(self.index) else {
            return Err(DecompressError::Truncated {
                bits_read: self.bits_read(),
            });
        };

        let bit = (value >> (SYMBOL_BITS - 1 - self.offset)) & 1;
        self.offset += 1;
        if self.offset == SYMBOL_BITS {
            self.offset = 0;
            self.index += 1;
        }
        Ok(bit as u32)
    }

    /// Reads `count` bits into a value, least significant bit first.
    pub(crate) fn read_code(&mut self, count: u32) -> Result<u32, DecompressError> {
        let mut code = 0;
        for i in 0..count {
            code |= self.read_bit()? << i;
        }
        Ok(code)
    }
}
