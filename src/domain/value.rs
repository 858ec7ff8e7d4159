// ============================================================================
// Variant Storage
// Tagged payload with exactly one active representation
// ============================================================================

use crate::codec::FromText;
use crate::domain::Format;
use crate::numeric::{saturate_cast, saturate_from_i128, NumericLimits};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The payload of a Variant.
///
/// The active variant *is* the format: there is no separate discriminant that
/// could disagree with the stored data. The `String` payload is owned
/// exclusively and dropped as soon as another payload is assigned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Bool(bool),
    UInt8(u8),
    SInt8(i8),
    UInt16(u16),
    SInt16(i16),
    UInt32(u32),
    SInt32(i32),
    UInt64(u64),
    SInt64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Value::UInt8(0)
    }
}

impl Value {
    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn format(&self) -> Format {
        match self {
            Value::Bool(_) => Format::Bool,
            Value::UInt8(_) => Format::UInt8,
            Value::SInt8(_) => Format::SInt8,
            Value::UInt16(_) => Format::UInt16,
            Value::SInt16(_) => Format::SInt16,
            Value::UInt32(_) => Format::UInt32,
            Value::SInt32(_) => Format::SInt32,
            Value::UInt64(_) => Format::UInt64,
            Value::SInt64(_) => Format::SInt64,
            Value::Float32(_) => Format::Float32,
            Value::Float64(_) => Format::Float64,
            Value::String(_) => Format::String,
        }
    }

    /// Borrow the text payload of a `String` value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Exact integer value of a `Bool` or integer payload.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::Bool(b) => Some(b as i128),
            Value::UInt8(v) => Some(v as i128),
            Value::SInt8(v) => Some(v as i128),
            Value::UInt16(v) => Some(v as i128),
            Value::SInt16(v) => Some(v as i128),
            Value::UInt32(v) => Some(v as i128),
            Value::SInt32(v) => Some(v as i128),
            Value::UInt64(v) => Some(v as i128),
            Value::SInt64(v) => Some(v as i128),
            Value::Float32(_) | Value::Float64(_) | Value::String(_) => None,
        }
    }

    /// Any numeric payload widened to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float32(v) => Some(v as f64),
            Value::Float64(v) => Some(v),
            _ => self.as_integer().map(|v| v as f64),
        }
    }

    // ========================================================================
    // Logical Conversion
    // ========================================================================

    /// Read the payload as `T`.
    ///
    /// Unsigned, signed and float payloads funnel through `u64`, `i64` and
    /// `f64` respectively and are then saturate-cast into `T`. Text payloads
    /// are parsed with the leading-prefix rule of the codec.
    pub fn cast<T: NumericLimits + FromText>(&self) -> T {
        match self {
            Value::Bool(b) => T::from_i128(*b as i128),
            Value::UInt8(v) => saturate_cast::<T, u64>(*v as u64),
            Value::UInt16(v) => saturate_cast::<T, u64>(*v as u64),
            Value::UInt32(v) => saturate_cast::<T, u64>(*v as u64),
            Value::UInt64(v) => saturate_cast::<T, u64>(*v),
            Value::SInt8(v) => saturate_cast::<T, i64>(*v as i64),
            Value::SInt16(v) => saturate_cast::<T, i64>(*v as i64),
            Value::SInt32(v) => saturate_cast::<T, i64>(*v as i64),
            Value::SInt64(v) => saturate_cast::<T, i64>(*v),
            Value::Float32(v) => cast_float(*v as f64),
            Value::Float64(v) => cast_float(*v),
            Value::String(text) => T::from_text(text),
        }
    }

    /// Truthiness: non-zero numbers, and `"true"` or non-zero numeric text.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Float32(v) => *v != 0.0,
            Value::Float64(v) => *v != 0.0,
            Value::String(text) => bool::from_text(text),
            _ => self.as_integer().is_some_and(|v| v != 0),
        }
    }

    /// Convert to `format`, clamping or truncating where the target is narrower.
    pub fn convert(&self, format: Format) -> Value {
        match format {
            Format::Bool => Value::Bool(self.to_bool()),
            Format::UInt8 => Value::UInt8(self.cast()),
            Format::SInt8 => Value::SInt8(self.cast()),
            Format::UInt16 => Value::UInt16(self.cast()),
            Format::SInt16 => Value::SInt16(self.cast()),
            Format::UInt32 => Value::UInt32(self.cast()),
            Format::SInt32 => Value::SInt32(self.cast()),
            Format::UInt64 => Value::UInt64(self.cast()),
            Format::SInt64 => Value::SInt64(self.cast()),
            Format::Float32 => Value::Float32(self.cast()),
            Format::Float64 => Value::Float64(self.cast()),
            Format::String => Value::String(self.to_string()),
        }
    }

    /// Parse `text` directly into `format`.
    pub fn parse(format: Format, text: &str) -> Value {
        match format {
            Format::Bool => Value::Bool(bool::from_text(text)),
            Format::UInt8 => Value::UInt8(u8::from_text(text)),
            Format::SInt8 => Value::SInt8(i8::from_text(text)),
            Format::UInt16 => Value::UInt16(u16::from_text(text)),
            Format::SInt16 => Value::SInt16(i16::from_text(text)),
            Format::UInt32 => Value::UInt32(u32::from_text(text)),
            Format::SInt32 => Value::SInt32(i32::from_text(text)),
            Format::UInt64 => Value::UInt64(u64::from_text(text)),
            Format::SInt64 => Value::SInt64(i64::from_text(text)),
            Format::Float32 => Value::Float32(f32::from_text(text)),
            Format::Float64 => Value::Float64(f64::from_text(text)),
            Format::String => Value::String(text.to_owned()),
        }
    }

    // ========================================================================
    // Construction from engine results
    // ========================================================================

    /// Store an exact integer in `format` with native wraparound.
    pub(crate) fn wrapping_from_integer(format: Format, value: i128) -> Value {
        match format {
            Format::Bool => Value::Bool(value & 1 == 1),
            Format::UInt8 => Value::UInt8(value as u8),
            Format::SInt8 => Value::SInt8(value as i8),
            Format::UInt16 => Value::UInt16(value as u16),
            Format::SInt16 => Value::SInt16(value as i16),
            Format::UInt32 => Value::UInt32(value as u32),
            Format::SInt32 => Value::SInt32(value as i32),
            Format::UInt64 => Value::UInt64(value as u64),
            Format::SInt64 => Value::SInt64(value as i64),
            Format::Float32 => Value::Float32(value as f32),
            Format::Float64 => Value::Float64(value as f64),
            Format::String => Value::String(value.to_string()),
        }
    }

    /// Store an exact integer in `format`, clamping into its range.
    pub(crate) fn saturating_from_integer(format: Format, value: i128) -> Value {
        match format {
            Format::Bool => Value::Bool(value > 0),
            Format::UInt8 => Value::UInt8(saturate_from_i128(value)),
            Format::SInt8 => Value::SInt8(saturate_from_i128(value)),
            Format::UInt16 => Value::UInt16(saturate_from_i128(value)),
            Format::SInt16 => Value::SInt16(saturate_from_i128(value)),
            Format::UInt32 => Value::UInt32(saturate_from_i128(value)),
            Format::SInt32 => Value::SInt32(saturate_from_i128(value)),
            Format::UInt64 => Value::UInt64(saturate_from_i128(value)),
            Format::SInt64 => Value::SInt64(saturate_from_i128(value)),
            Format::Float32 => Value::Float32(saturate_from_i128(value)),
            Format::Float64 => Value::Float64(saturate_from_i128(value)),
            Format::String => Value::String(value.to_string()),
        }
    }
}

/// Float-to-`T` cast that keeps infinities when `T` is itself floating.
#[inline]
fn cast_float<T: NumericLimits>(value: f64) -> T {
    if T::IS_FLOATING && value.is_infinite() {
        T::from_f64(value)
    } else {
        saturate_cast::<T, f64>(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uint8_zero() {
        assert_eq!(Value::default(), Value::UInt8(0));
        assert_eq!(Value::default().format(), Format::UInt8);
    }

    #[test]
    fn test_cast_funnels_through_wide_types() {
        assert_eq!(Value::UInt16(300).cast::<u8>(), 255);
        assert_eq!(Value::SInt8(-5).cast::<u32>(), 0);
        assert_eq!(Value::SInt64(-5).cast::<i8>(), -5);
        assert_eq!(Value::Float64(3.99).cast::<i32>(), 3);
        assert_eq!(Value::Float32(-1.5).cast::<u8>(), 0);
        assert_eq!(Value::Bool(true).cast::<f64>(), 1.0);
        assert_eq!(Value::UInt64(u64::MAX).cast::<i64>(), i64::MAX);
    }

    #[test]
    fn test_cast_from_text() {
        assert_eq!(Value::String("42".into()).cast::<i32>(), 42);
        assert_eq!(Value::String("12abc".into()).cast::<u16>(), 12);
        assert_eq!(Value::String("abc".into()).cast::<u16>(), 0);
        assert_eq!(Value::String("2.5".into()).cast::<f32>(), 2.5);
    }

    #[test]
    fn test_cast_keeps_infinity_between_floats() {
        assert_eq!(Value::Float64(f64::INFINITY).cast::<f32>(), f32::INFINITY);
        assert_eq!(Value::Float64(f64::INFINITY).cast::<i16>(), i16::MAX);
    }

    #[test]
    fn test_to_bool() {
        assert!(Value::SInt32(-1).to_bool());
        assert!(!Value::UInt8(0).to_bool());
        assert!(Value::String("TRUE".into()).to_bool());
        assert!(!Value::String("false".into()).to_bool());
        assert!(Value::String("2".into()).to_bool());
        assert!(!Value::String("nope".into()).to_bool());
    }

    #[test]
    fn test_convert() {
        assert_eq!(Value::SInt16(-3).convert(Format::UInt8), Value::UInt8(0));
        assert_eq!(Value::UInt8(7).convert(Format::String), Value::String("7".into()));
        assert_eq!(Value::Float64(2.0).convert(Format::Bool), Value::Bool(true));
        assert_eq!(
            Value::String("65000".into()).convert(Format::SInt16),
            Value::SInt16(i16::MAX)
        );
    }

    #[test]
    fn test_integer_construction() {
        assert_eq!(Value::wrapping_from_integer(Format::UInt8, 260), Value::UInt8(4));
        assert_eq!(Value::wrapping_from_integer(Format::SInt8, 128), Value::SInt8(-128));
        assert_eq!(Value::saturating_from_integer(Format::UInt8, 260), Value::UInt8(255));
        assert_eq!(Value::saturating_from_integer(Format::Bool, 5), Value::Bool(true));
        assert_eq!(Value::saturating_from_integer(Format::SInt16, -40_000), Value::SInt16(i16::MIN));
    }
}
