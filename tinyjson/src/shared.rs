// SPDX-License-Identifier: Apache-2.0

use crate::node_pool::Span;
use crate::parse_error::ParseError;

pub const fn from_utf8(v: &[u8]) -> Result<&str, ParseError> {
    match core::str::from_utf8(v) {
        Ok(s) => Ok(s),
        Err(e) => Err(ParseError::InvalidUtf8(e)),
    }
}

/// Text covered by `span`.
///
/// Every span stored in a finished tree was checked for UTF-8 while parsing,
/// so the empty-string fallback is never taken for a tree built by this crate.
pub fn text_at(buffer: &[u8], span: Span) -> &str {
    buffer
        .get(span.start..span.end)
        .and_then(|bytes| from_utf8(bytes).ok())
        .unwrap_or("")
}
