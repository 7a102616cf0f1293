//! Errors reported by decompression. Compression cannot fail.

use std::string::FromUtf16Error;

/// Structural problems in an otherwise well-formed symbol stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedStream {
    /// The first code must be a literal or the end marker.
    #[error("stream starts with dictionary reference {0}")]
    ReferenceBeforeLiteral(u32),
    /// A back-reference to a code that has not been assigned yet.
    #[error("dictionary reference {code} is beyond the next code {next_code}")]
    UnknownReference {
        /// The code that was read.
        code: u32,
        /// The code the next dictionary entry would get.
        next_code: u32,
    },
}

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum DecompressError {
    /// The compressed input was empty
    #[error("compressed input is empty")]
    EmptyInput,
    /// The input contains a character outside the URL-safe alphabet
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// The decoded code stream does not describe a valid dictionary walk
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] MalformedStream),
    /// The input ended before the end-of-stream marker
    #[error("stream ended after {bits_read} bits without an end marker")]
    Truncated {
        /// Number of bits consumed before running out.
        bits_read: usize,
    },
    /// The decoded text is not valid UTF-16
    #[error("decoded text is not valid UTF-16: {0}")]
    InvalidUtf16(#[from] FromUtf16Error),
}

impl DecompressError {
    /// Returns true when the input itself is not a compressed string:
    /// empty or containing characters outside the alphabet.
    ///
    /// All other errors mean the symbols were valid but the stream they
    /// encode is not.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InvalidCharacter { .. })
    }
}
