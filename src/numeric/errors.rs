// ============================================================================
// Numeric Errors
// Error types for variant arithmetic and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur during variant arithmetic or boundary conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero under `DivisionByZeroPolicy::Throw`
    DivisionByZero,
    /// Value does not fit the requested target representation
    Overflow,
    /// Input string or value is invalid for the requested conversion
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the target range")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not convert value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
