//! Decimal formatting of signed integers into caller buffers
//!
//! Digits are produced least-significant first, the sign is appended, and
//! the span is reversed in place. Every write is capacity-checked, so a
//! short buffer is an error instead of an overrun. Output is NUL terminated
//! for callers that hand the bytes to C-style consumers.

use crate::validation::bounds::{validate_capacity, MAX_DECIMAL_LEN};
use crate::{Result, SortkitError};

/// Terminator written after the last character
pub const NUL: u8 = 0;

/// Write the decimal form of `n` into `buffer`, NUL terminated
///
/// Returns the text without its terminator. Needs
/// [`required_capacity`](crate::validation::required_capacity) bytes;
/// 12 bytes fit every `i32`. On `InsufficientBuffer` nothing is written.
///
/// The magnitude is taken as `u32`, so `i32::MIN` formats as
/// `-2147483648` rather than overflowing.
pub fn int_to_string(n: i32, buffer: &mut [u8]) -> Result<&str> {
    let len = write_decimal(n, buffer)?;
    as_ascii(&buffer[..len])
}

/// Core digit writer; returns the text length excluding the NUL
fn write_decimal(n: i32, buffer: &mut [u8]) -> Result<usize> {
    validate_capacity(n, buffer.len())?;

    // The digit loop would emit nothing for zero
    if n == 0 {
        buffer[0] = b'0';
        buffer[1] = NUL;
        return Ok(1);
    }

    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();
    let mut i = 0;

    while magnitude > 0 {
        buffer[i] = b'0' + (magnitude % 10) as u8;
        i += 1;
        magnitude /= 10;
    }

    if negative {
        buffer[i] = b'-';
        i += 1;
    }

    buffer[i] = NUL;
    buffer[..i].reverse();

    Ok(i)
}

fn as_ascii(bytes: &[u8]) -> Result<&str> {
    // Only ASCII digits and '-' are ever written
    core::str::from_utf8(bytes).map_err(|_| SortkitError::InvalidNumber)
}

/// Fixed-capacity decimal text buffer
///
/// Holds one formatted integer at a time. The default capacity of 12 bytes
/// fits every `i32`; smaller capacities reject values that do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalBuffer<const N: usize = { MAX_DECIMAL_LEN }> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> DecimalBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            bytes: [NUL; N],
            len: 0,
        }
    }

    /// Format `n`, replacing any previous contents
    ///
    /// On error the buffer is left empty.
    pub fn format(&mut self, n: i32) -> Result<&str> {
        self.clear();
        self.len = write_decimal(n, &mut self.bytes)?;
        Ok(self.as_str())
    }

    /// Current text, without terminator
    pub fn as_str(&self) -> &str {
        // write_decimal only stores ASCII, and `len` never splits a char
        as_ascii(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Current text followed by its NUL terminator
    ///
    /// An empty buffer yields just the terminator (or nothing when `N == 0`).
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let end = (self.len + 1).min(N);
        &self.bytes[..end]
    }

    /// Length of the current text in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether nothing has been formatted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes, terminator included
    pub const fn capacity() -> usize {
        N
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.bytes.fill(NUL);
        self.len = 0;
    }
}

impl<const N: usize> Default for DecimalBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Display for DecimalBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format `n` into a freshly allocated `String`
#[cfg(feature = "alloc")]
pub fn to_decimal_string(n: i32) -> alloc::string::String {
    let mut buffer = DecimalBuffer::<MAX_DECIMAL_LEN>::new();
    match buffer.format(n) {
        Ok(text) => alloc::string::String::from(text),
        // Unreachable: the default capacity fits every i32
        Err(_) => alloc::string::String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_string_examples() {
        let mut buffer = [0xFFu8; 20];
        assert_eq!(int_to_string(0, &mut buffer), Ok("0"));
        assert_eq!(int_to_string(-1, &mut buffer), Ok("-1"));
        assert_eq!(int_to_string(42, &mut buffer), Ok("42"));
        assert_eq!(int_to_string(-2, &mut buffer), Ok("-2"));
        assert_eq!(int_to_string(1000, &mut buffer), Ok("1000"));
        assert_eq!(int_to_string(i32::MAX, &mut buffer), Ok("2147483647"));
    }

    #[test]
    fn test_int_to_string_writes_terminator() {
        let mut buffer = [0xFFu8; 8];
        assert_eq!(int_to_string(-305, &mut buffer), Ok("-305"));
        assert_eq!(&buffer[..5], b"-305\0");
        // Bytes past the terminator are untouched
        assert_eq!(buffer[5], 0xFF);

        assert_eq!(int_to_string(0, &mut buffer), Ok("0"));
        assert_eq!(&buffer[..2], b"0\0");
    }

    #[test]
    fn test_int_to_string_most_negative() {
        let mut buffer = [0u8; MAX_DECIMAL_LEN];
        assert_eq!(int_to_string(i32::MIN, &mut buffer), Ok("-2147483648"));
        assert_eq!(buffer[MAX_DECIMAL_LEN - 1], NUL);
    }

    #[test]
    fn test_int_to_string_insufficient_buffer() {
        let mut buffer = [0xAAu8; 3];
        assert_eq!(
            int_to_string(123, &mut buffer),
            Err(SortkitError::InsufficientBuffer)
        );
        assert_eq!(
            int_to_string(-10, &mut buffer),
            Err(SortkitError::InsufficientBuffer)
        );
        // No partial write
        assert_eq!(buffer, [0xAA; 3]);

        let mut tiny = [0u8; 1];
        assert_eq!(int_to_string(0, &mut tiny), Err(SortkitError::InsufficientBuffer));
        assert_eq!(int_to_string(0, &mut []), Err(SortkitError::InsufficientBuffer));
    }

    #[test]
    fn test_decimal_buffer() {
        let mut buffer = DecimalBuffer::<MAX_DECIMAL_LEN>::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_bytes_with_nul(), b"\0");

        assert_eq!(buffer.format(-45), Ok("-45"));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_str(), "-45");
        assert_eq!(buffer.as_bytes_with_nul(), b"-45\0");

        // Reuse replaces the previous value entirely
        assert_eq!(buffer.format(7), Ok("7"));
        assert_eq!(buffer.as_bytes_with_nul(), b"7\0");

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(DecimalBuffer::<MAX_DECIMAL_LEN>::capacity(), 12);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_to_decimal_string() {
        assert_eq!(to_decimal_string(0), "0");
        assert_eq!(to_decimal_string(-905), "-905");
        assert_eq!(to_decimal_string(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_decimal_buffer_small_capacity() {
        let mut buffer = DecimalBuffer::<3>::new();
        assert_eq!(buffer.format(99), Ok("99"));
        assert_eq!(buffer.format(100), Err(SortkitError::InsufficientBuffer));
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_str(), "");
    }
}
