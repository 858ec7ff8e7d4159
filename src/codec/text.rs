// ============================================================================
// String Codec
// Text formatting and stream-style prefix parsing for every format
// ============================================================================

use crate::domain::Value;
use crate::numeric::{saturate_from_i128, NumericLimits};
use std::fmt;

// ============================================================================
// Formatting
// ============================================================================

/// Textual form of a value.
///
/// Booleans render as `true`/`false`, integers in decimal. Floats use the
/// shortest digits that parse back to the identical value, laid out in
/// general notation: scientific (`1e+300`, `2.5e-07`) when the decimal
/// exponent is below -4 or at least the format's precision, fixed otherwise.
/// Non-finite values print as `NaN`, `inf` and `-inf`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::UInt8(v) => write!(f, "{}", v),
            Value::SInt8(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::SInt16(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::SInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::SInt64(v) => write!(f, "{}", v),
            Value::Float32(v) => write_float(f, *v, FLOAT32_PRECISION),
            Value::Float64(v) => write_float(f, *v, FLOAT64_PRECISION),
            Value::String(text) => f.write_str(text),
        }
    }
}

/// Significant digits that always round-trip a value of each width
const FLOAT32_PRECISION: i32 = 9;
const FLOAT64_PRECISION: i32 = 17;

fn write_float<T>(f: &mut fmt::Formatter<'_>, value: T, precision: i32) -> fmt::Result
where
    T: fmt::Display + fmt::LowerExp,
{
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        // NaN and infinities
        return write!(f, "{}", value);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else {
        write!(f, "{}", value)
    }
}

/// Whether `candidate` reproduces `text` closely enough to replace it.
///
/// Accepts an exact textual match, or a formatted candidate whose first
/// `text.len()` bytes equal `text`. Empty text never round-trips.
pub fn round_trips(candidate: &Value, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let formatted = candidate.to_string();
    formatted == text || formatted.get(..text.len()) == Some(text)
}

// ============================================================================
// Parsing
// ============================================================================

/// Best-effort parse of a leading numeric prefix.
///
/// Leading whitespace is skipped and trailing garbage ignored. Text with no
/// usable prefix yields zero; out-of-range integers saturate.
pub trait FromText: Sized {
    fn from_text(text: &str) -> Self;
}

macro_rules! impl_integer_from_text {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromText for $t {
                #[inline]
                fn from_text(text: &str) -> Self {
                    saturate_from_i128::<$t>(integer_prefix(text))
                }
            }
        )*
    };
}

macro_rules! impl_float_from_text {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromText for $t {
                fn from_text(text: &str) -> Self {
                    let prefix = float_prefix(text);
                    let parsed: $t = prefix.parse().unwrap_or(0.0);
                    // finite text too large for the width saturates
                    if parsed.is_infinite() && prefix.bytes().any(|b| b.is_ascii_digit()) {
                        if parsed > 0.0 {
                            <$t as NumericLimits>::MAX
                        } else {
                            <$t as NumericLimits>::MIN
                        }
                    } else {
                        parsed
                    }
                }
            }
        )*
    };
}

impl_integer_from_text!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_float_from_text!(f32, f64);

impl FromText for bool {
    fn from_text(text: &str) -> Self {
        parse_bool_literal(text.trim()).unwrap_or_else(|| f64::from_text(text) != 0.0)
    }
}

/// Parse text into `T` (see [`FromText`]).
#[inline]
pub fn parse<T: FromText>(text: &str) -> T {
    T::from_text(text)
}

/// Case-insensitive `"true"` / `"false"`.
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Value of the leading `[+-]?[0-9]+` prefix, saturating far outside 64 bits.
fn integer_prefix(text: &str) -> i128 {
    let bytes = text.trim_start().as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let magnitude = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i128, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as i128)
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Longest leading slice that forms a float literal `str::parse` accepts.
fn float_prefix(text: &str) -> &str {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if s.get(end..end + word.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(word))
        {
            return &s[..end + word.len()];
        }
    }

    let integer_digits = digits_from(end);
    end += integer_digits;
    let mut mantissa_digits = integer_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = digits_from(end + 1);
        mantissa_digits += fraction_digits;
        if mantissa_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = digits_from(end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    &s[..end]
}
