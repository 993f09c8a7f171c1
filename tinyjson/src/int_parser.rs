// SPDX-License-Identifier: Apache-2.0

// Decimal i64 conversion for integer literals, usable in const contexts.

/// Why a literal could not be turned into an `i64`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConstParseIntegerError {
    /// No bytes at all.
    Empty,
    /// A lone `+` or `-`.
    SignOnly,
    /// A byte other than `0`-`9` after the sign.
    InvalidDigit,
    /// The number overflowed or underflowed `i64`.
    Overflow,
}

/// Parses a byte slice into an `i64` in a `const` context.
///
/// This function is guaranteed not to panic.
pub const fn from_ascii_i64(src: &[u8]) -> Result<i64, ConstParseIntegerError> {
    let (is_negative, mut digits) = match src {
        [] => return Err(ConstParseIntegerError::Empty),
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, src),
    };

    if digits.is_empty() {
        return Err(ConstParseIntegerError::SignOnly);
    }

    let mut result: i64 = 0;

    while let Some((&byte, rest)) = digits.split_first() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as i64,
            _ => return Err(ConstParseIntegerError::InvalidDigit),
        };

        result = match result.checked_mul(10) {
            Some(val) => val,
            None => return Err(ConstParseIntegerError::Overflow),
        };

        // Accumulating negatively reaches i64::MIN without overflow.
        result = if is_negative {
            match result.checked_sub(digit) {
                Some(val) => val,
                None => return Err(ConstParseIntegerError::Overflow),
            }
        } else {
            match result.checked_add(digit) {
                Some(val) => val,
                None => return Err(ConstParseIntegerError::Overflow),
            }
        };

        digits = rest;
    }

    Ok(result)
}
