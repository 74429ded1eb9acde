//! Error types for sortkit operations

/// Errors that can occur during sortkit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortkitError {
    /// Explicit length exceeds the slice it describes
    IndexOutOfBounds,
    /// Output buffer too small for the formatted value
    InsufficientBuffer,
    /// Text is not a decimal integer
    InvalidNumber,
    /// Decimal value does not fit in an `i32`
    NumberOverflow,
}

/// Broad grouping of [`SortkitError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Length/index contract violations
    Bounds,
    /// Caller buffers that are too small
    Capacity,
    /// Malformed numeric text
    Parse,
}

impl SortkitError {
    /// Category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SortkitError::IndexOutOfBounds => ErrorCategory::Bounds,
            SortkitError::InsufficientBuffer => ErrorCategory::Capacity,
            SortkitError::InvalidNumber | SortkitError::NumberOverflow => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for SortkitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SortkitError::IndexOutOfBounds => "Index out of bounds",
            SortkitError::InsufficientBuffer => "Insufficient buffer space",
            SortkitError::InvalidNumber => "Invalid decimal number",
            SortkitError::NumberOverflow => "Number out of range",
        };
        write!(f, "{msg}")
    }
}

/// Result type for sortkit operations
pub type Result<T> = core::result::Result<T, SortkitError>;
