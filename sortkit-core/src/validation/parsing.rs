//! Parsing utilities for decimal integer text
//!
//! The inverse of the formatter: strict decimal parsing with no locale,
//! no `+` sign and no surrounding whitespace. Used to read integer lists
//! from the command line and to check formatter output.

use crate::SortkitError;

/// Parse a decimal `i32` with an optional leading `-`
///
/// Accumulates the value as a negative number so that `-2147483648`
/// parses without passing through an unrepresentable magnitude.
pub fn parse_int(text: &str) -> Result<i32, SortkitError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if digits.is_empty() {
        return Err(SortkitError::InvalidNumber);
    }

    let mut result: i32 = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SortkitError::InvalidNumber);
        }

        let digit = (byte - b'0') as i32;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_sub(digit))
            .ok_or(SortkitError::NumberOverflow)?;
    }

    if negative {
        Ok(result)
    } else {
        result.checked_neg().ok_or(SortkitError::NumberOverflow)
    }
}

/// Parse a comma-separated list of integers into `out`
///
/// Items are trimmed of surrounding whitespace. Returns the number of
/// values written. An empty (or all-whitespace) list yields zero values.
pub fn parse_int_list(text: &str, out: &mut [i32]) -> Result<usize, SortkitError> {
    if text.trim().is_empty() {
        return Ok(0);
    }

    let mut count = 0;

    for item in text.split(',') {
        let value = parse_int(item.trim())?;

        let slot = out.get_mut(count).ok_or(SortkitError::InsufficientBuffer)?;
        *slot = value;
        count += 1;
    }

    Ok(count)
}
