use crate::bits::BitReader;
use crate::compressor::{END_OF_STREAM, FIRST_CODE, LITERAL_16, LITERAL_8};
use crate::error::{DecompressError, MalformedStream};
use crate::width::CodeWidth;

/// One decoded code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// A unit seen for the first time.
    Literal(u16),
    /// A code of an existing (or the next) dictionary entry.
    Reference(u32),
    EndOfStream,
}

/// Where the decoder is in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Expecting the first literal or an immediate end marker.
    Bootstrap,
    /// Expanding codes; `previous` is the code of the last entry output.
    Streaming { previous: u32 },
    Done,
}

/// A dictionary entry stored as its prefix code plus one extra unit.
#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: Option<u32>,
    unit: u16,
    first: u16,
    len: usize,
}

/// Mirror of the compressor's dictionary walk.
pub(crate) struct Decompressor {
    reader: BitReader,
    entries: Vec<Entry>,
    width: CodeWidth,
    output: Vec<u16>,
}

impl Decompressor {
    pub(crate) fn new(input: &str) -> Result<Self, DecompressError> {
        Ok(Self {
            reader: BitReader::new(input)?,
            entries: Vec::new(),
            width: CodeWidth::new(),
            output: Vec::new(),
        })
    }

    /// Runs the stream to its end marker and returns the decoded units.
    pub(crate) fn run(mut self) -> Result<Vec<u16>, DecompressError> {
        let mut phase = Phase::Bootstrap;

        while phase != Phase::Done {
            phase = match phase {
                Phase::Bootstrap => self.bootstrap()?,
                Phase::Streaming { previous } => self.step(previous)?,
                Phase::Done => Phase::Done,
            };
        }

        tracing::debug!(
            output_units = self.output.len(),
            entries = self.entries.len(),
            bits_read = self.reader.bits_read(),
            "decompressed"
        );
        Ok(self.output)
    }

    fn bootstrap(&mut self) -> Result<Phase, DecompressError> {
        match self.read_token()? {
            Token::EndOfStream => Ok(Phase::Done),
            Token::Reference(code) => {
                tracing::warn!(code, "stream starts with a dictionary reference");
                Err(MalformedStream::ReferenceBeforeLiteral(code).into())
            }
            Token::Literal(unit) => {
                let code = self.push_literal(unit);
                // The first literal also accounts for the extension the
                // compressor registers alongside it.
                self.width.advance();
                self.output.push(unit);
                Ok(Phase::Streaming { previous: code })
            }
        }
    }

    fn step(&mut self, previous: u32) -> Result<Phase, DecompressError> {
        let code = match self.read_token()? {
            Token::EndOfStream => return Ok(Phase::Done),
            Token::Literal(unit) => self.push_literal(unit),
            Token::Reference(code) => code,
        };

        let next_code = self.next_code();
        let start = self.output.len();
        if code < next_code {
            self.expand(code);
        } else if code == next_code {
            // The entry being defined right now: previous + previous[0].
            self.expand(previous);
            let first = self.output[start];
            self.output.push(first);
        } else {
            tracing::warn!(code, next_code, "dictionary reference out of range");
            return Err(MalformedStream::UnknownReference { code, next_code }.into());
        }

        let prefix = self.entry(previous);
        let entry = Entry {
            prefix: Some(previous),
            unit: self.output[start],
            first: prefix.first,
            len: prefix.len + 1,
        };
        self.entries.push(entry);
        self.width.advance();

        Ok(Phase::Streaming { previous: code })
    }

    fn read_token(&mut self) -> Result<Token, DecompressError> {
        let token = match self.reader.read_code(self.width.num_bits())? {
            LITERAL_8 => Token::Literal(self.reader.read_code(8)? as u16),
            LITERAL_16 => Token::Literal(self.reader.read_code(16)? as u16),
            END_OF_STREAM => Token::EndOfStream,
            code => Token::Reference(code),
        };
        Ok(token)
    }

    fn next_code(&self) -> u32 {
        FIRST_CODE + self.entries.len() as u32
    }

    fn entry(&self, code: u32) -> Entry {
        self.entries[(code - FIRST_CODE) as usize]
    }

    fn push_literal(&mut self, unit: u16) -> u32 {
        let code = self.next_code();
        self.entries.push(Entry {
            prefix: None,
            unit,
            first: unit,
            len: 1,
        });
        self.width.advance();
        code
    }

    /// Appends the units of entry `code`, filling back to front along the
    /// prefix chain.
    fn expand(&mut self, code: u32) {
        let entry = self.entry(code);
        let start = self.output.len();
        self.output.resize(start + entry.len, 0);

        let mut cursor = Some(code);
        let mut i = start + entry.len;
        while let Some(code) = cursor {
            let entry = self.entry(code);
            i -= 1;
            self.output[i] = entry.unit;
            cursor = entry.prefix;
        }
    }
}
