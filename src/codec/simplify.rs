// ============================================================================
// Simplification
// Narrow text and floating values to the smallest exact native format
// ============================================================================

use super::text::{parse_bool_literal, round_trips};
use crate::domain::{Format, Value};
use std::borrow::Cow;

/// Candidate formats, tried in order after the boolean literals
const CANDIDATES: [Format; 10] = [
    Format::SInt8,
    Format::UInt8,
    Format::SInt16,
    Format::UInt16,
    Format::SInt32,
    Format::UInt32,
    Format::SInt64,
    Format::UInt64,
    Format::Float32,
    Format::Float64,
];

/// Find the narrowest format that reproduces `value`'s text.
///
/// Only `String` and floating values take part; every other format returns
/// `None`. Text is matched against `true`/`false` (case-insensitive) first,
/// then each candidate is parsed and kept if it passes the round-trip
/// criterion. A floating value is re-parsed from its own textual form and is
/// never "simplified" into its own width or wider.
///
/// # Example
/// ```
/// use scalar_variant::codec::simplify;
/// use scalar_variant::domain::Value;
///
/// assert_eq!(simplify(&Value::String("300".into())), Some(Value::SInt16(300)));
/// assert_eq!(simplify(&Value::Float64(2.0)), Some(Value::SInt8(2)));
/// assert_eq!(simplify(&Value::String("foo".into())), None);
/// ```
pub fn simplify(value: &Value) -> Option<Value> {
    let (text, source) = match value {
        Value::String(text) => (Cow::Borrowed(text.as_str()), None),
        Value::Float32(_) | Value::Float64(_) => {
            (Cow::Owned(value.to_string()), Some(value.format()))
        }
        _ => return None,
    };

    if source.is_none() {
        if let Some(literal) = parse_bool_literal(&text) {
            tracing::trace!("Simplified {:?} to Bool", text);
            return Some(Value::Bool(literal));
        }
    }

    let simplified = CANDIDATES
        .iter()
        .copied()
        .take_while(|&candidate| Some(candidate) != source)
        .map(|candidate| Value::parse(candidate, &text))
        .find(|candidate| round_trips(candidate, &text));

    match &simplified {
        Some(narrowed) => tracing::trace!("Simplified {:?} to {}", text, narrowed.format()),
        None => tracing::trace!("{:?} does not simplify", text),
    }

    simplified
}
