// SPDX-License-Identifier: Apache-2.0

use crate::node_pool::{NodeKind, Span};
use crate::parse_error::ParseError;
use crate::scanner::{is_digit, Scanner};

/// Decimal digits of `i64::MAX`.
const I64_MAX_DIGITS: &[u8] = b"9223372036854775807";
/// Decimal digits of `i64::MIN`, without the sign.
const I64_MIN_DIGITS: &[u8] = b"9223372036854775808";

/// Checks that an integer's digit run fits in `i64` without converting it.
///
/// `digits` never carries a leading zero unless it is exactly `0`, so a
/// longer run is always larger, and at equal length the byte-wise order of
/// ASCII digits is the numeric order.
pub fn check_i64_range(negative: bool, digits: &[u8]) -> Result<(), ParseError> {
    let boundary = if negative {
        I64_MIN_DIGITS
    } else {
        I64_MAX_DIGITS
    };
    if digits.len() > boundary.len() {
        return Err(ParseError::NumericOverflow);
    }
    if digits.len() == boundary.len() && digits > boundary {
        return Err(ParseError::NumericOverflow);
    }
    Ok(())
}

/// Requires at least one digit at the cursor, then consumes the whole run.
fn expect_digits(scanner: &mut Scanner<'_>) -> Result<u8, ParseError> {
    if !is_digit(scanner.peek()?) {
        return Err(ParseError::InvalidNumber);
    }
    Ok(scanner.scan_digits()?)
}

/// Validates the number literal at the cursor and leaves the cursor on the
/// byte after it.
///
/// Returns [`NodeKind::Integer`] or [`NodeKind::Real`] and the literal's span.
/// The caller is responsible for checking and terminating whatever follows.
pub fn scan_number(scanner: &mut Scanner<'_>) -> Result<(NodeKind, Span), ParseError> {
    let start = scanner.current_pos();

    let mut next = scanner.peek()?;
    let negative = next == b'-';
    if negative {
        scanner.advance();
        next = scanner.peek()?;
    }

    let digits_start = scanner.current_pos();
    next = match next {
        b'0' => {
            scanner.advance();
            let after_zero = scanner.peek()?;
            if is_digit(after_zero) {
                return Err(ParseError::InvalidNumber);
            }
            after_zero
        }
        b'1'..=b'9' => scanner.scan_digits()?,
        _ if negative => return Err(ParseError::InvalidNumber),
        _ => return Err(ParseError::UnexpectedCharacter),
    };
    let digits_end = scanner.current_pos();

    let mut kind = NodeKind::Integer;
    if next == b'.' {
        scanner.advance();
        next = expect_digits(scanner)?;
        kind = NodeKind::Real;
    }
    if matches!(next, b'e' | b'E') {
        scanner.advance();
        if matches!(scanner.peek()?, b'+' | b'-') {
            scanner.advance();
        }
        expect_digits(scanner)?;
        kind = NodeKind::Real;
    }

    if kind == NodeKind::Integer {
        let digits = scanner.slice(Span::new(digits_start, digits_end))?;
        check_i64_range(negative, digits)?;
    }

    Ok((kind, Span::new(start, scanner.current_pos())))
}
