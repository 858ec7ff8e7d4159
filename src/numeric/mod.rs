// ============================================================================
// Numeric Module
// Limits, saturating casts and arithmetic for the native scalar types
// ============================================================================
//
// This module provides:
// - NumericLimits: per-type bounds and classification
// - saturate_cast / saturate_{add,sub,mul,div}: clamp instead of overflow
// - NumericError: Error types for arithmetic and conversion
//
// Design principles:
// - Integer comparisons go through an exact i128 intermediate
// - Fallible operations return Result (no panics)

mod errors;
mod limits;
mod saturate;

pub use errors::{NumericError, NumericResult};
pub use limits::{is_floating, is_signed, is_unsigned, max, min, NumericLimits};
pub use saturate::{
    saturate_add, saturate_cast, saturate_div, saturate_from_i128, saturate_mul, saturate_sub,
};
