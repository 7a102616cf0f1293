/// Code-width schedule shared by the compressor and decompressor.
///
/// Both sides advance this once per dictionary entry they create, so the
/// width used for every code stays in lockstep. A literal creates two
/// entries and therefore advances twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeWidth {
    num_bits: u32,
    enlarge_in: u32,
}

impl CodeWidth {
    /// Width for the first code of a stream.
    pub(crate) const fn new() -> Self {
        Self {
            num_bits: 2,
            enlarge_in: 1,
        }
    }

    /// Number of bits used for the next code.
    #[inline]
    pub(crate) const fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Accounts for one new dictionary entry, growing the width when the
    /// countdown runs out.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.enlarge_in == 0 {
            self.enlarge_in = u32::MAX >> (u32::BITS - self.num_bits);
            self.num_bits += 1;
            tracing::trace!(num_bits = self.num_bits, "code width grew");
        } else {
            self.enlarge_in -= 1;
        }
    }
}

impl Default for CodeWidth {
    fn default() -> Self {
        Self::new()
    }
}
