// ============================================================================
// Variant
// A dynamically-typed scalar with policy-driven arithmetic
// ============================================================================

use crate::codec;
use crate::domain::{DivisionByZeroPolicy, Format, InternalValuePolicy, Value, VariantConfig};
use crate::engine::{self, Operator};
use crate::interfaces::Primitive;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar that holds any primitive, converts on demand and performs
/// arithmetic across formats.
///
/// The configuration is copied from the process default at construction and
/// only ever read from the instance afterwards.
///
/// # Example
/// ```
/// use scalar_variant::prelude::*;
///
/// let mut v = Variant::from(250u8);
/// v += 10i8;
/// assert_eq!(v.format(), Format::SInt16);
/// assert_eq!(v, 260);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Value", into = "Value")
)]
pub struct Variant {
    value: Value,
    config: VariantConfig,
}

impl Variant {
    // ========================================================================
    // Construction
    // ========================================================================

    /// `UInt8(0)` with the process default configuration
    pub fn new() -> Self {
        Self::from(Value::default())
    }

    /// Builder method: Replace this Variant's configuration
    pub fn with_config(mut self, config: VariantConfig) -> Self {
        self.config = config;
        self
    }

    /// Construct from text and simplify it to its narrowest exact format.
    pub fn parse(text: &str) -> Self {
        let mut variant = Self::from(text);
        variant.simplify();
        variant
    }

    #[inline]
    pub fn config(&self) -> VariantConfig {
        self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: VariantConfig) {
        self.config = config;
    }

    // ========================================================================
    // Storage
    // ========================================================================

    #[inline]
    pub fn format(&self) -> Format {
        self.value.format()
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Replace the payload, keeping the configuration
    #[inline]
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Store `value` in its canonical format.
    #[inline]
    pub fn set<T: Primitive>(&mut self, value: T) {
        self.value = value.into_value();
    }

    /// Read the payload as `T`, converting logically.
    #[inline]
    pub fn get<T: Primitive>(&self) -> T {
        T::from_value(&self.value)
    }

    /// Borrow the text of a `String` Variant
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn set_string(&mut self, text: impl Into<String>) {
        self.value = Value::String(text.into());
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Narrow a `String` or floating Variant to the smallest format that
    /// represents it exactly. Returns whether the format changed.
    pub fn simplify(&mut self) -> bool {
        match codec::simplify(&self.value) {
            Some(narrowed) => {
                self.value = narrowed;
                true
            }
            None => false,
        }
    }

    /// Force conversion to `format`; narrowing clamps or truncates.
    pub fn promote(&mut self, format: Format) {
        if self.format() != format {
            tracing::trace!("Converting {:?} to {}", self.value, format);
            self.value = self.value.convert(format);
        }
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True for signed integer formats. Floats report `false` here and in
    /// `is_unsigned`, unlike `numeric::is_signed::<f32>()` which describes
    /// the primitive's range.
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.format().is_signed()
    }

    #[inline]
    pub fn is_unsigned(&self) -> bool {
        self.format().is_unsigned()
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        self.format().is_floating()
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.format().is_string()
    }

    /// Strictly greater than zero. Text is judged by its simplified value.
    pub fn is_positive(&self) -> bool {
        engine::sign(&self.value) == Some(1)
    }

    /// Strictly less than zero. Text is judged by its simplified value.
    pub fn is_negative(&self) -> bool {
        engine::sign(&self.value) == Some(-1)
    }

    pub fn is_zero(&self) -> bool {
        engine::sign(&self.value) == Some(0)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Apply `self = self op rhs` under this Variant's configuration.
    ///
    /// The receiver is only modified when the operation yields a result; on
    /// error, or when the operation is a no-op, it is left as it was.
    ///
    /// # Errors
    /// `NumericError::DivisionByZero` when dividing by zero under
    /// `DivisionByZeroPolicy::Throw`.
    pub fn apply(&mut self, op: Operator, rhs: &Variant) -> NumericResult<()> {
        if let Some(result) = engine::evaluate(&self.value, op, &rhs.value, &self.config)? {
            self.value = result;
        }
        Ok(())
    }

    pub fn try_add(&mut self, rhs: impl Into<Variant>) -> NumericResult<()> {
        self.apply(Operator::Add, &rhs.into())
    }

    pub fn try_sub(&mut self, rhs: impl Into<Variant>) -> NumericResult<()> {
        self.apply(Operator::Subtract, &rhs.into())
    }

    pub fn try_mul(&mut self, rhs: impl Into<Variant>) -> NumericResult<()> {
        self.apply(Operator::Multiply, &rhs.into())
    }

    /// Fallible division.
    ///
    /// # Errors
    /// `NumericError::DivisionByZero` under `DivisionByZeroPolicy::Throw`.
    pub fn try_div(&mut self, rhs: impl Into<Variant>) -> NumericResult<()> {
        self.apply(Operator::Divide, &rhs.into())
    }

    /// `+= 1`
    pub fn increment(&mut self) {
        *self += 1u8;
    }

    /// `-= 1`
    pub fn decrement(&mut self) {
        *self -= 1u8;
    }

    /// Panicking form used by the operator traits
    fn apply_or_panic(&mut self, op: Operator, rhs: Variant) {
        if let Err(err) = self.apply(op, &rhs) {
            panic!("Variant {} {} {}: {}", self, op, rhs, err);
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way compare, returning -1, 0 or 1.
    ///
    /// Text on either side is simplified first (on a copy). Numeric values
    /// compare exactly across formats, everything else compares as text.
    #[inline]
    pub fn compare(&self, other: &Variant) -> i32 {
        engine::compare(&self.value, &other.value)
    }

    // ========================================================================
    // Decimal Interop
    // ========================================================================

    /// Narrowest exact Variant for a decimal (text if no native format fits).
    pub fn from_decimal(decimal: Decimal) -> Self {
        Self::parse(&decimal.normalize().to_string())
    }

    /// Exact decimal value of the payload.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN and text that is not a decimal number
    /// - `Overflow` for infinities and magnitudes beyond `Decimal`'s range
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        match &self.value {
            Value::Float32(v) if v.is_nan() => Err(NumericError::InvalidInput),
            Value::Float64(v) if v.is_nan() => Err(NumericError::InvalidInput),
            Value::Float32(v) => Decimal::from_f32(*v).ok_or(NumericError::Overflow),
            Value::Float64(v) => Decimal::from_f64(*v).ok_or(NumericError::Overflow),
            Value::String(text) => text
                .trim()
                .parse::<Decimal>()
                .map_err(|_| NumericError::InvalidInput),
            other => other
                .as_integer()
                .and_then(Decimal::from_i128)
                .ok_or(NumericError::Overflow),
        }
    }

    /// Natural JSON form: booleans, numbers and strings. Non-finite floats
    /// become `null`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match &self.value {
            Value::Bool(b) => Json::Bool(*b),
            // through text so 0.1f32 stays 0.1
            Value::Float32(v) => json_float(codec::parse::<f64>(&v.to_string())),
            Value::Float64(v) => json_float(*v),
            Value::String(text) => Json::String(text.clone()),
            Value::UInt64(v) => Json::from(*v),
            other => other
                .as_integer()
                .and_then(|v| i64::try_from(v).ok())
                .map_or(Json::Null, Json::from),
        }
    }

    // ========================================================================
    // Process Defaults
    // ========================================================================

    /// Division-by-zero policy for Variants constructed from now on
    pub fn set_division_by_zero_policy(policy: DivisionByZeroPolicy) {
        VariantConfig::update_global(|config| config.division_by_zero = policy);
    }

    pub fn division_by_zero_policy() -> DivisionByZeroPolicy {
        VariantConfig::global().division_by_zero
    }

    /// Internal value policy for Variants constructed from now on
    pub fn set_internal_value_policy(policy: InternalValuePolicy) {
        VariantConfig::update_global(|config| config.internal_value = policy);
    }

    pub fn internal_value_policy() -> InternalValuePolicy {
        VariantConfig::global().internal_value
    }
}

#[cfg(feature = "serde")]
fn json_float(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

// ============================================================================
// Typed Accessors
// ============================================================================

macro_rules! typed_accessors {
    ($($t:ty => $get:ident, $set:ident;)*) => {
        impl Variant {
            $(
                #[doc = concat!("Read as `", stringify!($t), "`")]
                #[inline]
                pub fn $get(&self) -> $t {
                    self.get()
                }

                #[doc = concat!("Store a `", stringify!($t), "`")]
                #[inline]
                pub fn $set(&mut self, value: $t) {
                    self.set(value);
                }
            )*
        }
    };
}

typed_accessors! {
    bool => to_bool, set_bool;
    u8 => to_u8, set_u8;
    i8 => to_i8, set_i8;
    u16 => to_u16, set_u16;
    i16 => to_i16, set_i16;
    u32 => to_u32, set_u32;
    i32 => to_i32, set_i32;
    u64 => to_u64, set_u64;
    i64 => to_i64, set_i64;
    f32 => to_f32, set_f32;
    f64 => to_f64, set_f64;
}

// ============================================================================
// Conversions
// ============================================================================

impl Default for Variant {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        Self {
            value,
            config: VariantConfig::global(),
        }
    }
}

impl From<Variant> for Value {
    fn from(variant: Variant) -> Self {
        variant.value
    }
}

impl From<&Variant> for Variant {
    fn from(variant: &Variant) -> Self {
        variant.clone()
    }
}

impl From<&str> for Variant {
    fn from(text: &str) -> Self {
        Self::from(Value::String(text.to_owned()))
    }
}

impl FromStr for Variant {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Variant {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from(value.into_value())
                }
            }
        )*
    };
}

impl_from_primitive!(bool, u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, String);

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_operator {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $operator:expr) => {
        impl<T: Into<Variant>> $op_assign<T> for Variant {
            fn $method_assign(&mut self, rhs: T) {
                self.apply_or_panic($operator, rhs.into());
            }
        }

        impl<T: Into<Variant>> $op<T> for Variant {
            type Output = Variant;

            fn $method(mut self, rhs: T) -> Variant {
                self.$method_assign(rhs);
                self
            }
        }

        impl<T: Into<Variant>> $op<T> for &Variant {
            type Output = Variant;

            fn $method(self, rhs: T) -> Variant {
                let mut result = self.clone();
                result.$method_assign(rhs);
                result
            }
        }
    };
}

impl_operator!(Add, add, AddAssign, add_assign, Operator::Add);
impl_operator!(Sub, sub, SubAssign, sub_assign, Operator::Subtract);
impl_operator!(Mul, mul, MulAssign, mul_assign, Operator::Multiply);
impl_operator!(Div, div, DivAssign, div_assign, Operator::Divide);

// ============================================================================
// Comparison Operators
// ============================================================================

impl PartialEq for Variant {
    fn eq(&self, other: &Variant) -> bool {
        self.compare(other) == 0
    }
}

impl PartialOrd for Variant {
    fn partial_cmp(&self, other: &Variant) -> Option<Ordering> {
        Some(self.compare(other).cmp(&0))
    }
}

macro_rules! impl_primitive_comparison {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<$t> for Variant {
                fn eq(&self, other: &$t) -> bool {
                    engine::compare(&self.value, &other.clone().into_value()) == 0
                }
            }

            impl PartialOrd<$t> for Variant {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(engine::compare(&self.value, &other.clone().into_value()).cmp(&0))
                }
            }
        )*
    };
}

impl_primitive_comparison!(bool, u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, String);

impl PartialEq<&str> for Variant {
    fn eq(&self, other: &&str) -> bool {
        engine::compare(&self.value, &Value::String((*other).to_owned())) == 0
    }
}

impl PartialOrd<&str> for Variant {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(engine::compare(&self.value, &Value::String((*other).to_owned())).cmp(&0))
    }
}
