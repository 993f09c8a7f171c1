// SPDX-License-Identifier: Apache-2.0

use crate::node_pool::Span;
use crate::parse_error::ParseError;

/// Byte written in place of a `\uXXXX` escape when Unicode decoding is off.
#[cfg(not(feature = "unicode-escapes"))]
pub const UNICODE_PLACEHOLDER: u8 = b'?';

/// Decoding rules for JSON escape sequences, independent of any buffer.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Maps the byte after a backslash to the byte it stands for.
    ///
    /// `u` is not handled here; see [`decode_hex4`](Self::decode_hex4).
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        let unescaped = match escape_char {
            b'"' | b'\\' | b'/' => escape_char,
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            _ => return Err(ParseError::InvalidEscapeSequence),
        };
        Ok(unescaped)
    }

    /// Value of one hex digit of a `\uXXXX` escape.
    pub fn validate_hex_digit(byte: u8) -> Result<u32, ParseError> {
        char::from(byte)
            .to_digit(16)
            .ok_or(ParseError::InvalidUnicodeHex)
    }

    /// Decodes the four hex digits of a `\uXXXX` escape.
    pub fn decode_hex4(digits: &[u8]) -> Result<u32, ParseError> {
        if digits.len() != 4 {
            return Err(ParseError::InvalidUnicodeHex);
        }
        digits
            .iter()
            .try_fold(0u32, |acc, &digit| -> Result<u32, ParseError> {
                Ok((acc << 4) | Self::validate_hex_digit(digit)?)
            })
    }

    /// `\uD800` to `\uDBFF` open a surrogate pair.
    #[cfg(feature = "unicode-escapes")]
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        matches!(codepoint, 0xD800..=0xDBFF)
    }

    /// `\uDC00` to `\uDFFF` close one.
    #[cfg(feature = "unicode-escapes")]
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        matches!(codepoint, 0xDC00..=0xDFFF)
    }

    /// Codepoint encoded by a high/low surrogate pair.
    #[cfg(feature = "unicode-escapes")]
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<u32, ParseError> {
        if Self::is_high_surrogate(high) && Self::is_low_surrogate(low) {
            Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
        } else {
            Err(ParseError::InvalidUnicodeCodepoint)
        }
    }
}

/// Writable view of one string being unescaped.
///
/// `head` reads ahead of `tail`; every escape produces fewer bytes than it
/// consumes, so writes never overtake unread input.
struct InPlace<'d> {
    data: &'d mut [u8],
    head: usize,
    tail: usize,
}

impl InPlace<'_> {
    fn byte_at(&self, index: usize) -> Result<u8, ParseError> {
        match self.data.get(index) {
            Some(&byte) if byte != 0 => Ok(byte),
            _ => Err(ParseError::EndOfData),
        }
    }

    fn hex_at(&self, start: usize) -> Result<u32, ParseError> {
        let end = start.checked_add(4).ok_or(ParseError::EndOfData)?;
        let hex = self.data.get(start..end).ok_or(ParseError::EndOfData)?;
        EscapeProcessor::decode_hex4(hex)
    }

    fn emit(&mut self, byte: u8) -> Result<(), ParseError> {
        let slot = self
            .data
            .get_mut(self.tail)
            .ok_or(ParseError::UnexpectedState("Unescape cursor out of range"))?;
        *slot = byte;
        self.tail = self.tail.saturating_add(1);
        Ok(())
    }

    /// Handles `\uXXXX` with `head` on the `u`.
    #[cfg(not(feature = "unicode-escapes"))]
    fn unicode_escape(&mut self) -> Result<(), ParseError> {
        self.hex_at(self.head.saturating_add(1))?;
        self.emit(UNICODE_PLACEHOLDER)?;
        self.head = self.head.saturating_add(5);
        Ok(())
    }

    /// Handles `\uXXXX`, or a `\uXXXX\uXXXX` surrogate pair, with `head` on the first `u`.
    #[cfg(feature = "unicode-escapes")]
    fn unicode_escape(&mut self) -> Result<(), ParseError> {
        let mut codepoint = self.hex_at(self.head.saturating_add(1))?;
        let mut consumed = 5;
        if EscapeProcessor::is_high_surrogate(codepoint) {
            let low_start = self.head.saturating_add(5);
            if self.byte_at(low_start)? != b'\\' || self.byte_at(low_start + 1)? != b'u' {
                return Err(ParseError::InvalidUnicodeCodepoint);
            }
            let low = self.hex_at(low_start + 2)?;
            codepoint = EscapeProcessor::combine_surrogate_pair(codepoint, low)?;
            consumed = 11;
        } else if EscapeProcessor::is_low_surrogate(codepoint) {
            return Err(ParseError::InvalidUnicodeCodepoint);
        }
        let ch = char::from_u32(codepoint).ok_or(ParseError::InvalidUnicodeCodepoint)?;
        let mut encoded = [0u8; 4];
        for &byte in ch.encode_utf8(&mut encoded).as_bytes() {
            self.emit(byte)?;
        }
        self.head = self.head.saturating_add(consumed);
        Ok(())
    }
}

/// Unescapes a quoted string in place.
///
/// `start` is the index just past the opening quote. Unescaped bytes are
/// shifted left over the escape sequences and the closing quote is replaced
/// by NUL.
///
/// # Returns
/// The span of the unescaped text and the index just past the closing quote.
pub fn unescape_in_place(data: &mut [u8], start: usize) -> Result<(Span, usize), ParseError> {
    let mut cursor = InPlace {
        data,
        head: start,
        tail: start,
    };
    loop {
        let byte = cursor.byte_at(cursor.head)?;
        match byte {
            b'"' => {
                let end = cursor.tail;
                cursor.emit(0)?;
                return Ok((Span::new(start, end), cursor.head.saturating_add(1)));
            }
            b'\\' => {
                cursor.head = cursor.head.saturating_add(1);
                match cursor.byte_at(cursor.head)? {
                    b'u' => cursor.unicode_escape()?,
                    escape_char => {
                        let unescaped = EscapeProcessor::process_simple_escape(escape_char)?;
                        cursor.emit(unescaped)?;
                        cursor.head = cursor.head.saturating_add(1);
                    }
                }
            }
            byte if byte < b' ' => return Err(ParseError::ControlCharacter),
            byte => {
                cursor.emit(byte)?;
                cursor.head = cursor.head.saturating_add(1);
            }
        }
    }
}
