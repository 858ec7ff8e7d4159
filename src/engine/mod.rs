// ============================================================================
// Engine Module
// Mixed-format arithmetic and comparison on Variant payloads
// ============================================================================
//
// This module provides:
// - Operator / Plan / resolve: promotion rules for a binary operation
// - evaluate: arithmetic under the configured policies
// - compare / sign: cross-format three-way ordering

mod arithmetic;
mod comparison;
mod promotion;

pub use arithmetic::evaluate;
pub use comparison::{compare, sign};
pub use promotion::{resolve, Operator, Plan};
