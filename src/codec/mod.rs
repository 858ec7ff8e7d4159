// ============================================================================
// Codec Module
// Text encode/decode and simplification of Variant payloads
// ============================================================================
//
// This module provides:
// - Display for Value: canonical textual form of every format
// - FromText / parse: stream-style leading-prefix parsing
// - round_trips: acceptance rule for lossless text narrowing
// - simplify: narrowest exact format for text and floating values

mod simplify;
mod text;

pub use simplify::simplify;
pub use text::{parse, parse_bool_literal, round_trips, FromText};
