//! HTTP/1 Header Block Parser.
//!
//! A header block is a sequence of `Name: value` lines, each terminated by LF with an optional
//! preceding CR, followed by an empty line:
//!
//! ```not_rust
//! Cookie: hello=world,\r\n
//!  foo=bar\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! ```
//!
//! A line starting with space or tab is a continuation of the previous field, its content is
//! joined to the previous value with a single space. Names are stored in canonical form, and
//! a single space after the colon is removed from the value.
//!
//! There are multiple entry points with the same semantic:
//!
//! - [`HeaderMap::read_from`] reads from [`BufRead`]
//! - [`HeaderMap::parse_bytes`] parses a slice and returns the number of bytes consumed
//! - [`HeaderMap::parse_chunk`] works on a connection buffer that may not contain the whole
//!   block yet, returns [`ParseResult::Pending`] if more bytes is required
//! - `HeaderMap::read_from_async` reads from tokio `AsyncBufRead`, requires `tokio` feature
use std::io::BufRead;

use bytes::{Buf, BytesMut};

use crate::common::ParseResult;
use crate::headers::{HeaderMap, HeaderName};
use crate::log::{debug, trace, warning};
use crate::matches;

mod error;
#[cfg(feature = "tokio")]
mod io_async;

pub use error::ParseError;

#[cfg(test)]
mod test;

// ===== Line =====

/// Classified header line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    /// Empty line, end of header block.
    End,
    /// Line with leading whitespace, whitespace removed.
    Continuation(&'a [u8]),
    /// Header field, single space after the colon removed.
    Field(&'a [u8], &'a [u8]),
}

/// Classify line, the LF must already be removed.
fn classify(line: &[u8]) -> Result<Line<'_>, ParseError> {
    let line = match line {
        [line @ .., b'\r'] => line,
        line => line,
    };

    match line {
        [] => Ok(Line::End),
        [b' ' | b'\t', ..] => {
            let start = line
                .iter()
                .position(|b| !matches::is_ows(*b))
                .unwrap_or(line.len());
            Ok(Line::Continuation(&line[start..]))
        }
        _ => {
            let Some(colon) = line.iter().position(|b| *b == b':') else {
                return Err(ParseError::InvalidHeader);
            };
            let value = match &line[colon + 1..] {
                [b' ', value @ ..] => value,
                value => value,
            };
            Ok(Line::Field(&line[..colon], value))
        }
    }
}

// ===== State Machine =====

/// Step after a line is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ReadLine,
    End,
}

/// Header block state, shared by all entry points.
#[derive(Debug, Default)]
struct Block {
    /// index of the field of the previous line
    last: Option<usize>,
    lines: usize,
}

impl Block {
    /// Consume one line, without the LF.
    fn line(&mut self, map: &mut HeaderMap, line: &[u8]) -> Result<Step, ParseError> {
        self.lines += 1;

        match classify(line) {
            Ok(Line::End) => {
                debug!("header block complete, {} lines", self.lines);
                Ok(Step::End)
            }
            Ok(Line::Continuation(rest)) => {
                let Some(value) = self.last.and_then(|index| map.last_value_mut(index)) else {
                    warning!("continuation line without header at line {}", self.lines);
                    return Err(ParseError::LeadingContinuation);
                };
                value.push(' ');
                value.push_str(&String::from_utf8_lossy(rest));
                Ok(Step::ReadLine)
            }
            Ok(Line::Field(name, value)) => {
                let name = HeaderName::new(&String::from_utf8_lossy(name));
                trace!("header field {name}");
                let value = String::from_utf8_lossy(value).into_owned();
                self.last = Some(map.append_field(name, value));
                Ok(Step::ReadLine)
            }
            Err(err) => {
                warning!("malformed header line {}: {err}", self.lines);
                Err(err)
            }
        }
    }
}

// ===== Entry Points =====

impl HeaderMap {
    /// Read header block from a buffered reader.
    ///
    /// The reader is consumed up to and including the empty line that terminates the block.
    /// Parsed fields are appended to the map.
    ///
    /// ```rust
    /// use std::io::{BufRead, Cursor};
    /// use httphead::headers::HeaderMap;
    ///
    /// let mut reader = Cursor::new(&b"Cookie: hello=world,\n foo=bar\n\nbody"[..]);
    /// let mut map = HeaderMap::new();
    /// map.read_from(&mut reader).unwrap();
    ///
    /// assert_eq!(map.get_all("cookie").collect::<Vec<_>>(), ["hello=world, foo=bar"]);
    /// assert_eq!(reader.fill_buf().unwrap(), b"body");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Truncated`] if the reader reaches end of file before the empty line,
    /// [`ParseError::Io`] if the reader returns error, and other variants for malformed lines.
    /// Fields parsed before the error are left in the map.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ParseError> {
        let mut block = Block::default();
        let mut buf = Vec::with_capacity(64);

        loop {
            buf.clear();
            reader.read_until(b'\n', &mut buf)?;

            let Some((b'\n', line)) = buf.split_last() else {
                return Err(ParseError::Truncated);
            };

            if block.line(self, line)? == Step::End {
                return Ok(());
            }
        }
    }

    /// Parse header block from bytes.
    ///
    /// Returns the number of bytes consumed, which is the offset right after the empty line that
    /// terminates the block. Parsed fields are appended to the map.
    ///
    /// ```rust
    /// use httphead::headers::HeaderMap;
    ///
    /// let input = b"Host: example.com\r\n\r\nbody";
    /// let mut map = HeaderMap::new();
    /// let n = map.parse_bytes(input).unwrap();
    ///
    /// assert_eq!(&input[n..], b"body");
    /// assert_eq!(map.get("host"), Some("example.com"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Truncated`] if the empty line is not found, and other variants for
    /// malformed lines. Fields parsed before the error are left in the map.
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let mut block = Block::default();
        let mut offset = 0;

        loop {
            let rest = &bytes[offset..];
            let Some(lf) = rest.iter().position(|b| *b == b'\n') else {
                return Err(ParseError::Truncated);
            };

            offset += lf + 1;

            if block.line(self, &rest[..lf])? == Step::End {
                return Ok(offset);
            }
        }
    }

    /// Parse header block from a buffer that may not contain the whole block yet.
    ///
    /// If the block is complete, parsed fields are appended to the map, and `bytes` is advanced
    /// past the empty line.
    ///
    /// If the block is not complete, returns [`ParseResult::Pending`] and neither `bytes` nor the
    /// map is modified. Every call parses `bytes` from the start, so a block that arrives in many
    /// small reads is scanned once per read.
    ///
    /// ```rust
    /// use bytes::BytesMut;
    /// use httphead::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// let mut bytes = BytesMut::from(&b"Host: example.com\r\nAcc"[..]);
    ///
    /// assert!(map.parse_chunk(&mut bytes).is_pending());
    /// assert!(map.is_empty());
    ///
    /// bytes.extend_from_slice(b"ept: */*\r\n\r\nbody");
    ///
    /// assert!(map.parse_chunk(&mut bytes).is_ok());
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(&bytes[..], b"body");
    /// ```
    pub fn parse_chunk(&mut self, bytes: &mut BytesMut) -> ParseResult<(), ParseError> {
        let mut block = HeaderMap::new();

        match block.parse_bytes(bytes) {
            Err(ParseError::Truncated) => ParseResult::Pending,
            result => result
                .map(|n| {
                    bytes.advance(n);
                    self.append_map(block);
                })
                .into(),
        }
    }
}
