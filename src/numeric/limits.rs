// ============================================================================
// Numeric Limits
// Per-type bounds and classification for the native scalar types
// ============================================================================

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Bounds and classification of a native numeric type.
///
/// Implemented for `u8..u64`, `i8..i64`, `f32` and `f64`. The widening
/// accessors (`to_i128`, `to_f64`) are exact for every integer type, which
/// lets the saturating helpers compare values of different types without
/// going through a lossy intermediate.
pub trait NumericLimits:
    Copy + PartialOrd + Default + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
    /// Smallest representable value (most negative for floats)
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// Whether the type can hold negative values
    const IS_SIGNED: bool;
    /// Whether the type is a binary floating-point type
    const IS_FLOATING: bool;

    /// Widen to `f64` (native cast).
    fn to_f64(self) -> f64;

    /// Widen to `i128`. Floats truncate toward zero and saturate, NaN is 0.
    fn to_i128(self) -> i128;

    /// Native `as` cast from `f64`.
    fn from_f64(value: f64) -> Self;

    /// Native `as` cast from `i128` (integers wrap).
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_integer_limits {
    ($($t:ty => $signed:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl NumericLimits for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const IS_SIGNED: bool = $signed;
                const IS_FLOATING: bool = false;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_limits {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl NumericLimits for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const IS_SIGNED: bool = true;
                const IS_FLOATING: bool = true;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integer_limits!(
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
);

impl_float_limits!(f32, f64);

/// Smallest value of `T`.
#[inline]
pub fn min<T: NumericLimits>() -> T {
    T::MIN
}

/// Largest value of `T`.
#[inline]
pub fn max<T: NumericLimits>() -> T {
    T::MAX
}

/// Whether `T` can hold negative values; true for `f32` and `f64`.
///
/// `Variant::is_signed` answers a different question (signed integer format)
/// and is false for floats.
#[inline]
pub fn is_signed<T: NumericLimits>() -> bool {
    T::IS_SIGNED
}

#[inline]
pub fn is_unsigned<T: NumericLimits>() -> bool {
    !T::IS_SIGNED
}

#[inline]
pub fn is_floating<T: NumericLimits>() -> bool {
    T::IS_FLOATING
}
