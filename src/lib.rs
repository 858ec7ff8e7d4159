// ============================================================================
// Scalar Variant Library
// Dynamically-typed scalar with policy-driven mixed-format arithmetic
// ============================================================================

//! # Scalar Variant
//!
//! A single value type that can hold a bool, any fixed-width integer, a float
//! or a string, convert between them, and do arithmetic across them.
//!
//! ## Features
//!
//! - **Mixed-format arithmetic** with signed/unsigned and width promotion
//! - **Configurable overflow**: wraparound, saturation or type promotion
//! - **Configurable division by zero**: report an error or ignore
//! - **Text simplification** to the narrowest exact numeric format
//! - **Exact cross-format comparison**, including integer vs float
//!
//! ## Example
//!
//! ```rust
//! use scalar_variant::prelude::*;
//!
//! // Numeric text takes part in arithmetic
//! let mut v = Variant::from("5");
//! v += 1i32;
//! assert_eq!(v.format(), Format::SInt32);
//! assert_eq!(v, 6);
//!
//! // Inexact integer division becomes a float
//! let mut v = Variant::from(5u8);
//! v /= 2u8;
//! assert_eq!(v.to_f64(), 2.5);
//!
//! // Per-instance policies
//! let mut v = Variant::from(250u8).with_config(VariantConfig::wrapping());
//! v += 10u8;
//! assert_eq!(v.to_u8(), 4);
//!
//! // Division by zero is reported, never silent, unless configured
//! let mut v = Variant::from(1u8);
//! assert_eq!(v.try_div(0u8), Err(NumericError::DivisionByZero));
//! ```

pub mod codec;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DivisionByZeroPolicy, Family, Format, InternalValuePolicy, Value, Variant, VariantConfig,
    };
    pub use crate::engine::Operator;
    pub use crate::interfaces::Primitive;
    pub use crate::numeric::{NumericError, NumericResult};
}
