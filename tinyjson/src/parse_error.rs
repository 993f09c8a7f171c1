// SPDX-License-Identifier: Apache-2.0

use crate::node_pool::NodeKind;
use crate::scanner;

/// Errors that can occur while building a tree.
///
/// Every error is fatal: a failed parse never yields a partial tree. The input
/// buffer has still been rewritten up to the point of failure.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The node pool ran out of slots. Retrying with a larger pool may succeed.
    PoolExhausted,
    /// The input ended (or hit a NUL byte) before the root object was closed.
    EndOfData,
    /// The top-level value is not an object.
    NotAnObject,
    /// A byte that cannot start or continue the expected token.
    UnexpectedCharacter,
    /// A `}` closed an array or a `]` closed an object.
    MismatchedCloser,
    /// Containers are nested deeper than the parser's configured maximum.
    NestingTooDeep,
    /// A raw control character (below 0x20) inside a string.
    ControlCharacter,
    /// Invalid escape sequence character.
    InvalidEscapeSequence,
    /// Invalid hex digits in Unicode escape sequence.
    InvalidUnicodeHex,
    /// Valid hex but invalid Unicode codepoint.
    InvalidUnicodeCodepoint,
    /// A number literal does not follow the JSON number grammar.
    InvalidNumber,
    /// An integer literal outside the range of `i64`.
    NumericOverflow,
    /// A key or string value was not valid UTF-8 after unescaping.
    InvalidUtf8(core::str::Utf8Error),
    /// The scratch buffer given to [`parse_copy`](crate::parse_copy) is shorter than the source.
    ScratchBufferFull,
    /// The parser entered an unexpected internal state.
    UnexpectedState(&'static str),
}

impl ParseError {
    /// True when the failure is caused by pool capacity rather than by the input.
    pub fn is_pool_exhausted(&self) -> bool {
        matches!(self, ParseError::PoolExhausted)
    }
}

impl From<scanner::Error> for ParseError {
    fn from(err: scanner::Error) -> Self {
        match err {
            scanner::Error::ReachedEnd => ParseError::EndOfData,
            scanner::Error::UnexpectedByte => ParseError::UnexpectedCharacter,
        }
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::PoolExhausted => write!(f, "Node pool exhausted"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            ParseError::UnexpectedState(msg) => write!(f, "Unexpected state: {msg}"),
            _ => write!(f, "{self:?}"),
        }
    }
}

/// Errors returned by the typed accessors of [`JsonValue`](crate::JsonValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The node is not of the kind the accessor reads.
    WrongKind { expected: NodeKind, found: NodeKind },
    /// The stored literal could not be converted.
    InvalidNumber,
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueError::WrongKind { expected, found } => {
                write!(f, "Expected {expected} value, found {found}")
            }
            ValueError::InvalidNumber => write!(f, "Invalid number literal"),
        }
    }
}
