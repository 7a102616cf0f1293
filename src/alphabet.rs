/// The 64 URL-safe output symbols, indexed by their 6-bit value.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-";

const INVALID: u8 = 0xFF;

/// Reverse lookup from byte to 6-bit value, `INVALID` for bytes outside the alphabet.
const VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the symbol for a 6-bit value. Only the low six bits are used.
#[inline]
pub(crate) const fn symbol_for(value: u8) -> u8 {
    ALPHABET[(value & 0x3F) as usize]
}

/// Returns the 6-bit value of a symbol, or `None` if the byte is not in the alphabet.
#[inline]
pub(crate) const fn value_for(symbol: u8) -> Option<u8> {
    match VALUES[symbol as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Reverses the bit order of a 16-bit value.
///
/// Literal units are written as the reversed value, most significant bit
/// first, which puts the unit on the wire least significant bit first.
#[inline]
pub(crate) const fn reverse_bits16(value: u16) -> u16 {
    let value = (value >> 1) & 0x5555 | (value & 0x5555) << 1;
    let value = (value >> 2) & 0x3333 | (value & 0x3333) << 2;
    let value = (value >> 4) & 0x0F0F | (value & 0x0F0F) << 4;
    (value >> 8) & 0x00FF | (value & 0x00FF) << 8
}
