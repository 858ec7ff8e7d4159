// ============================================================================
// Primitive Interface
// Static-type dispatch for typed get/set on a Variant
// ============================================================================

use crate::domain::{Format, Value};

mod sealed {
    pub trait Sealed {}
}

/// A native type a Variant can store and be read as.
///
/// Implemented for `bool`, `u8..u64`, `i8..i64`, `f32`, `f64` and `String`.
/// Each type has one canonical [`Format`]; storing a value never narrows it.
pub trait Primitive: Clone + sealed::Sealed {
    /// Canonical format of this type
    const FORMAT: Format;

    /// Wrap the value in its canonical payload
    fn into_value(self) -> Value;

    /// Read any payload as this type, converting logically
    fn from_value(value: &Value) -> Self;
}

macro_rules! impl_numeric_primitive {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                const FORMAT: Format = Format::$variant;

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                #[inline]
                fn from_value(value: &Value) -> Self {
                    value.cast()
                }
            }
        )*
    };
}

impl_numeric_primitive!(
    u8 => UInt8,
    i8 => SInt8,
    u16 => UInt16,
    i16 => SInt16,
    u32 => UInt32,
    i32 => SInt32,
    u64 => UInt64,
    i64 => SInt64,
    f32 => Float32,
    f64 => Float64,
);

impl sealed::Sealed for bool {}

impl Primitive for bool {
    const FORMAT: Format = Format::Bool;

    #[inline]
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    #[inline]
    fn from_value(value: &Value) -> Self {
        value.to_bool()
    }
}

impl sealed::Sealed for String {}

impl Primitive for String {
    const FORMAT: Format = Format::String;

    #[inline]
    fn into_value(self) -> Value {
        Value::String(self)
    }

    #[inline]
    fn from_value(value: &Value) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_formats() {
        assert_eq!(<u8 as Primitive>::FORMAT, Format::UInt8);
        assert_eq!(<i64 as Primitive>::FORMAT, Format::SInt64);
        assert_eq!(<f32 as Primitive>::FORMAT, Format::Float32);
        assert_eq!(<bool as Primitive>::FORMAT, Format::Bool);
        assert_eq!(<String as Primitive>::FORMAT, Format::String);
    }

    #[test]
    fn test_into_value_keeps_format() {
        assert_eq!(7u16.into_value(), Value::UInt16(7));
        assert_eq!((-7i8).into_value().format(), Format::SInt8);
        assert_eq!(String::from("x").into_value(), Value::String("x".into()));
    }

    #[test]
    fn test_from_value_converts() {
        assert_eq!(u8::from_value(&Value::SInt32(1000)), 255);
        assert_eq!(String::from_value(&Value::Float32(1.5)), "1.5");
        assert!(bool::from_value(&Value::String("true".into())));
    }
}
