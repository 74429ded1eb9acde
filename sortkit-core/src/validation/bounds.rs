//! Length and capacity validation
//!
//! Pure checks that turn caller contract violations (a length larger than
//! the slice, an output buffer too small for a value) into errors instead
//! of out-of-bounds accesses.

use crate::SortkitError;

/// Bytes needed for the longest `i32` text: `-2147483648` plus NUL
pub const MAX_DECIMAL_LEN: usize = 12;

/// Validate an explicit element count against the storage it describes
///
/// Returns the length unchanged when it fits.
pub const fn validate_length(length: usize, capacity: usize) -> Result<usize, SortkitError> {
    if length > capacity {
        return Err(SortkitError::IndexOutOfBounds);
    }

    Ok(length)
}

/// Count the decimal digits of a magnitude
pub const fn digit_count(mut magnitude: u32) -> usize {
    let mut count = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        count += 1;
    }
    count
}

/// Bytes the formatter writes for `n`: optional sign, digits and the NUL
/// terminator
pub const fn required_capacity(n: i32) -> usize {
    let sign = if n < 0 { 1 } else { 0 };
    sign + digit_count(n.unsigned_abs()) + 1
}

/// Validate that `capacity` bytes can hold the formatted form of `n`
pub const fn validate_capacity(n: i32, capacity: usize) -> Result<usize, SortkitError> {
    let needed = required_capacity(n);
    if needed > capacity {
        return Err(SortkitError::InsufficientBuffer);
    }

    Ok(needed)
}
