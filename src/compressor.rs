use crate::alphabet::reverse_bits16;
use crate::bits::BitWriter;
use crate::width::CodeWidth;
use ahash::AHashMap as HashMap;

/// Code that introduces an 8-bit literal.
pub(crate) const LITERAL_8: u32 = 0;
/// Code that introduces a 16-bit literal.
pub(crate) const LITERAL_16: u32 = 1;
/// Code that terminates the stream.
pub(crate) const END_OF_STREAM: u32 = 2;
/// First code handed out to a dictionary entry.
pub(crate) const FIRST_CODE: u32 = 3;

/// Parent slot used for single-unit entries.
const ROOT: u32 = 0;

/// Adaptive dictionary compressor.
///
/// The dictionary is a trie flattened into a hash map: each entry is keyed
/// by the code of its prefix and the unit that extends it. Single units hang
/// off `ROOT`, which can never be a real code.
pub(crate) struct Compressor {
    /// `(prefix code, unit) -> code`
    entries: HashMap<(u32, u16), u32>,

    /// Single-unit entries whose literal has not been written yet
    pending: HashMap<u32, u16>,

    /// Code of the current match, `None` before the first unit
    current: Option<u32>,

    next_code: u32,
    width: CodeWidth,
    writer: BitWriter,
    input_units: usize,
}

impl Compressor {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            pending: HashMap::new(),
            current: None,
            next_code: FIRST_CODE,
            width: CodeWidth::new(),
            writer: BitWriter::new(),
            input_units: 0,
        }
    }

    /// Feeds one code unit through the dictionary walk.
    pub(crate) fn push(&mut self, unit: u16) {
        self.input_units += 1;

        // A new unit is registered before anything else so it gets the
        // lower code of the pair this step may create.
        let single = match self.entries.get(&(ROOT, unit)) {
            Some(&code) => code,
            None => {
                let code = self.assign(ROOT, unit);
                self.pending.insert(code, unit);
                code
            }
        };

        let Some(prefix) = self.current else {
            self.current = Some(single);
            return;
        };

        match self.entries.get(&(prefix, unit)) {
            Some(&code) => self.current = Some(code),
            None => {
                self.emit(prefix);
                self.assign(prefix, unit);
                self.current = Some(single);
            }
        }
    }

    pub(crate) fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        for unit in iter {
            self.push(unit);
        }
    }

    /// Flushes the last match, writes the end marker and pads the output.
    pub(crate) fn finish(mut self) -> (String, CompressionStats) {
        if let Some(code) = self.current.take() {
            self.emit(code);
        }
        self.writer.write_code(END_OF_STREAM, self.width.num_bits());

        let output = self.writer.finish();
        let stats = CompressionStats {
            input_units: self.input_units,
            output_symbols: output.len(),
            dictionary_entries: (self.next_code - FIRST_CODE) as usize,
            final_code_width: self.width.num_bits(),
        };
        tracing::debug!(
            input_units = stats.input_units,
            output_symbols = stats.output_symbols,
            entries = stats.dictionary_entries,
            "compressed"
        );

        (output, stats)
    }

    fn assign(&mut self, prefix: u32, unit: u16) -> u32 {
        let code = self.next_code;
        self.entries.insert((prefix, unit), code);
        self.next_code += 1;
        code
    }

    /// Writes `code`, or its literal if this is the first time it is used.
    fn emit(&mut self, code: u32) {
        match self.pending.remove(&code) {
            Some(unit) => {
                let (marker, bits) = if unit > 0xFF {
                    (LITERAL_16, 16)
                } else {
                    (LITERAL_8, 8)
                };
                self.writer.write_code(marker, self.width.num_bits());
                self.writer
                    .write_msb_first(u32::from(reverse_bits16(unit)) >> (16 - bits), bits);

                // The unit's own entry and the extension created with it.
                self.width.advance();
                self.width.advance();
            }
            None => {
                self.writer.write_code(code, self.width.num_bits());
                self.width.advance();
            }
        }
    }
}

/// Statistics about one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of UTF-16 code units compressed
    pub input_units: usize,
    /// Number of symbols in the compressed output
    pub output_symbols: usize,
    /// Number of dictionary entries created
    pub dictionary_entries: usize,
    /// Code width in bits at the end of the stream
    pub final_code_width: u32,
}

impl CompressionStats {
    /// Returns the output size as a percentage of the input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_units == 0 {
            0.0
        } else {
            (self.output_symbols as f64 / self.input_units as f64) * 100.0
        }
    }
}
