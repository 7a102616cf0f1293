//! # lz-url - URL-safe string compression
//!
//! An LZ78-family compressor that turns UTF-16 text into a string over
//! `A-Z a-z 0-9 + -`, so the result can go straight into a query string or
//! fragment without percent-encoding or padding.
//!
//! The compressor builds an adaptive dictionary while scanning. A unit seen
//! for the first time is written as a literal. Every repeated substring is
//! written as a dictionary code whose bit width grows with the dictionary.
//! The decompressor replays the same dictionary growth from the codes alone.
//!
//! ## Example
//!
//! ```
//! let compressed = lz_url::compress("Hello world!");
//! assert!(compressed.bytes().all(|b| lz_url::ALPHABET.contains(&b)));
//!
//! let restored = lz_url::decompress(&compressed).unwrap();
//! assert_eq!(restored, "Hello world!");
//! ```
//!
//! ## Errors
//!
//! Compression never fails. Decompression reports empty input or foreign
//! characters (see [`DecompressError::is_invalid_input`]) and streams that
//! are structurally broken or cut short.

mod alphabet;
mod bits;
mod compressor;
mod decompressor;
mod error;
mod width;

#[cfg(test)]
mod tests;

pub use alphabet::ALPHABET;
pub use compressor::CompressionStats;
pub use error::{DecompressError, MalformedStream};

use compressor::Compressor;
use decompressor::Decompressor;

/// Compresses `text` into the URL-safe alphabet.
pub fn compress(text: &str) -> String {
    let mut compressor = Compressor::new();
    compressor.extend(text.encode_utf16());
    compressor.finish().0
}

/// Compresses a sequence of UTF-16 code units, which need not be valid UTF-16.
pub fn compress_utf16(units: &[u16]) -> String {
    compress_with_stats(units).0
}

/// Compresses a sequence of UTF-16 code units and reports statistics about the run.
pub fn compress_with_stats(units: &[u16]) -> (String, CompressionStats) {
    let mut compressor = Compressor::new();
    compressor.extend(units.iter().copied());
    compressor.finish()
}

/// Restores text produced by [`compress`].
///
/// Fails with [`DecompressError::InvalidUtf16`] if the stream decodes to
/// unpaired surrogates; use [`decompress_utf16`] for such payloads.
pub fn decompress(compressed: &str) -> Result<String, DecompressError> {
    let units = decompress_utf16(compressed)?;
    Ok(String::from_utf16(&units)?)
}

/// Restores the exact code units produced by [`compress_utf16`].
pub fn decompress_utf16(compressed: &str) -> Result<Vec<u16>, DecompressError> {
    Decompressor::new(compressed)?.run()
}
