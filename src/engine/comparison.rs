// ============================================================================
// Comparison
// Three-way ordering across formats
// ============================================================================

use crate::codec::simplify;
use crate::domain::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// 2^64: every integer payload is below this
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
/// -2^63: every integer payload is at or above this
const NEG_TWO_POW_63: f64 = -9_223_372_036_854_775_808.0;

/// Numeric view of a payload, exact for every integer format.
#[derive(Debug, Clone, Copy)]
enum Number {
    Integer(i128),
    Float(f64),
}

impl Number {
    fn of(value: &Value) -> Option<Number> {
        match *value {
            Value::Float32(v) => Some(Number::Float(v as f64)),
            Value::Float64(v) => Some(Number::Float(v)),
            _ => value.as_integer().map(Number::Integer),
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => compare_floats(a, b),
            (Number::Integer(a), Number::Float(b)) => compare_integer_float(a, b),
            (Number::Float(a), Number::Integer(b)) => compare_integer_float(b, a).reverse(),
        }
    }
}

/// Total order on floats with NaN above everything and equal to itself.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of a 64-bit integer with a float, without rounding the
/// integer through `f64`.
fn compare_integer_float(integer: i128, float: f64) -> Ordering {
    if float.is_nan() || float >= TWO_POW_64 {
        return Ordering::Less;
    }
    if float < NEG_TWO_POW_63 {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    match integer.cmp(&(whole as i128)) {
        Ordering::Equal => compare_floats(whole, float),
        unequal => unequal,
    }
}

/// Text narrowed to its simplest exact format, numbers as they are.
fn normalize(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::String(_) => simplify(value).map_or(Cow::Borrowed(value), Cow::Owned),
        _ => Cow::Borrowed(value),
    }
}

/// Three-way compare two payloads, returning -1, 0 or 1.
///
/// Text on either side is simplified first (on a copy). If both sides are
/// then numeric they compare by exact numeric value; booleans count as 0
/// and 1, and NaN sorts above every number. Otherwise both sides compare as
/// text, lexicographically by byte.
pub fn compare(lhs: &Value, rhs: &Value) -> i32 {
    let lhs = normalize(lhs);
    let rhs = normalize(rhs);

    let ordering = match (Number::of(&lhs), Number::of(&rhs)) {
        (Some(a), Some(b)) => a.compare(b),
        _ => lhs.to_string().cmp(&rhs.to_string()),
    };
    ordering as i32
}

/// Sign of a numeric payload; `None` for NaN and non-numeric text.
pub fn sign(value: &Value) -> Option<i32> {
    match Number::of(&normalize(value))? {
        Number::Float(v) if v.is_nan() => None,
        number => Some(number.compare(Number::Integer(0)) as i32),
    }
}
