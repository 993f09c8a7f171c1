// SPDX-License-Identifier: Apache-2.0

use crate::escape_processor;
use crate::node_pool::Span;
use crate::parse_error::ParseError;

/// Error type for Scanner operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data, or a NUL byte.
    ReachedEnd,
    /// The byte at the cursor is not acceptable here.
    UnexpectedByte,
}

/// JSON insignificant whitespace, plus form feed.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Container closers must survive primitive termination.
pub fn is_closer(byte: u8) -> bool {
    matches!(byte, b'}' | b']')
}

/// Bytes that may legally follow a primitive literal.
pub fn is_primitive_terminator(byte: u8) -> bool {
    is_whitespace(byte) || byte == b',' || is_closer(byte)
}

/// Cursor over the mutable input buffer.
///
/// Input ends at the end of the slice or at the first NUL byte, whichever
/// comes first.
#[derive(Debug)]
pub struct Scanner<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Byte at the cursor without consuming it.
    pub fn peek(&self) -> Result<u8, Error> {
        match self.data.get(self.pos) {
            Some(&byte) if byte != 0 => Ok(byte),
            _ => Err(Error::ReachedEnd),
        }
    }

    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Moves past whitespace and returns the first significant byte.
    pub fn skip_whitespace(&mut self) -> Result<u8, Error> {
        loop {
            let byte = self.peek()?;
            if !is_whitespace(byte) {
                return Ok(byte);
            }
            self.advance();
        }
    }

    /// Moves past a run of decimal digits and returns the byte after it.
    pub fn scan_digits(&mut self) -> Result<u8, Error> {
        loop {
            let byte = self.peek()?;
            if !is_digit(byte) {
                return Ok(byte);
            }
            self.advance();
        }
    }

    /// Consumes `literal` if the input at the cursor matches it exactly.
    pub fn match_keyword(&mut self, literal: &[u8]) -> Result<(), Error> {
        for &expected in literal {
            if self.peek()? != expected {
                return Err(Error::UnexpectedByte);
            }
            self.advance();
        }
        Ok(())
    }

    /// Ends a primitive literal in place.
    ///
    /// The byte after the literal becomes NUL and is consumed, unless it is
    /// a container closer, which is left for the caller.
    pub fn terminate_primitive(&mut self) -> Result<(), Error> {
        let byte = self.peek()?;
        if !is_primitive_terminator(byte) {
            return Err(Error::UnexpectedByte);
        }
        if !is_closer(byte) {
            if let Some(slot) = self.data.get_mut(self.pos) {
                *slot = 0;
            }
            self.advance();
        }
        Ok(())
    }

    /// Unescapes the string starting at the cursor (just past its opening
    /// quote) and leaves the cursor after the closing quote.
    pub fn unescape_string(&mut self) -> Result<Span, ParseError> {
        let (span, next) = escape_processor::unescape_in_place(self.data, self.pos)?;
        self.pos = next;
        let bytes = self.slice(span)?;
        crate::shared::from_utf8(bytes)?;
        Ok(span)
    }

    /// Gets the bytes covered by `span`, with bounds checking.
    pub fn slice(&self, span: Span) -> Result<&[u8], ParseError> {
        self.data
            .get(span.start..span.end)
            .ok_or(ParseError::UnexpectedState("Invalid slice bounds in input buffer"))
    }

    /// Gives up write access to the buffer.
    pub fn into_inner(self) -> &'a [u8] {
        self.data
    }
}
