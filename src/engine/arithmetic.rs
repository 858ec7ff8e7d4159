// ============================================================================
// Arithmetic Engine
// Evaluate `lhs op rhs` across formats under the configured policies
// ============================================================================

use super::promotion::{resolve, Operator, Plan};
use crate::codec::simplify;
use crate::domain::{
    DivisionByZeroPolicy, Family, Format, InternalValuePolicy, Value, VariantConfig,
};
use crate::numeric::{
    saturate_add, saturate_cast, saturate_div, saturate_from_i128, saturate_mul, saturate_sub,
    NumericError, NumericLimits, NumericResult,
};
use std::borrow::Cow;

/// Evaluate `lhs op rhs` and return the value the receiver should hold.
///
/// Returns `Ok(None)` when the receiver must stay untouched: a non-additive
/// operator on text that does not simplify, or a division by zero under
/// `DivisionByZeroPolicy::Ignore`. Text operands that simplify are narrowed
/// only for the purpose of this evaluation; nothing is committed unless a
/// result is returned.
///
/// # Errors
/// Returns `DivisionByZero` when dividing by zero under
/// `DivisionByZeroPolicy::Throw`.
pub fn evaluate(
    lhs: &Value,
    op: Operator,
    rhs: &Value,
    config: &VariantConfig,
) -> NumericResult<Option<Value>> {
    let mut lhs = Cow::Borrowed(lhs);
    let mut rhs = Cow::Borrowed(rhs);

    loop {
        match resolve(lhs.format(), rhs.format(), op) {
            Plan::Integer { family, format } => {
                return integer(&lhs, op, &rhs, family, format, config);
            }
            Plan::Float { format } => return float(&lhs, op, &rhs, format, config),
            Plan::Concatenate => return Ok(Some(concatenate(&lhs, &rhs))),
            Plan::Simplify => {
                let narrowed_lhs = simplify_text(&lhs);
                let narrowed_rhs = simplify_text(&rhs);

                if narrowed_lhs.is_none() && narrowed_rhs.is_none() {
                    if op == Operator::Add {
                        tracing::trace!("Concatenating {:?} + {:?}", lhs, rhs);
                        return Ok(Some(concatenate(&lhs, &rhs)));
                    }
                    tracing::trace!("Operator {} has no meaning for {:?}, {:?}", op, lhs, rhs);
                    return Ok(None);
                }

                if let Some(narrowed) = narrowed_lhs {
                    lhs = Cow::Owned(narrowed);
                }
                if let Some(narrowed) = narrowed_rhs {
                    rhs = Cow::Owned(narrowed);
                }
            }
        }
    }
}

/// Simplify text operands only; numbers keep their format.
fn simplify_text(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => simplify(value),
        _ => None,
    }
}

fn concatenate(lhs: &Value, rhs: &Value) -> Value {
    Value::String(format!("{}{}", lhs, rhs))
}

fn division_by_zero(config: &VariantConfig) -> NumericResult<Option<Value>> {
    match config.division_by_zero {
        DivisionByZeroPolicy::Throw => Err(NumericError::DivisionByZero),
        DivisionByZeroPolicy::Ignore => {
            tracing::debug!("Division by zero ignored, receiver left unchanged");
            Ok(None)
        }
    }
}

// ============================================================================
// Integer Families
// ============================================================================

/// Operands as exact integers in `family`'s 64-bit accumulator.
///
/// The receiver is always read exactly. In the signed family an unsigned
/// operand is saturate-cast into `i64`.
fn integer_operands(lhs: &Value, rhs: &Value, family: Family) -> Option<(i128, i128)> {
    let left = lhs.as_integer()?;
    let mut right = rhs.as_integer()?;

    if family == Family::Signed && rhs.format().is_unsigned() {
        right = rhs.cast::<i64>() as i128;
    }

    Some((left, right))
}

/// Storage format for the result: `format`, widened until it holds the
/// receiver's own value.
///
/// Only an unsigned receiver read as signed can fall outside `format`. It
/// moves to the next wider signed format that holds it, and a `u64` above
/// `i64::MAX` stays `UInt64`.
fn storage_format(lhs: &Value, left: i128, format: Format) -> Format {
    let mut target = format;
    while !target.fits(left) {
        match target.next_wider() {
            Some(wider) => target = wider,
            None => return lhs.format(),
        }
    }
    if target != format {
        tracing::trace!("Receiver {:?} needs {} instead of {}", lhs, target, format);
    }
    target
}

fn integer(
    lhs: &Value,
    op: Operator,
    rhs: &Value,
    family: Family,
    format: Format,
    config: &VariantConfig,
) -> NumericResult<Option<Value>> {
    let Some((left, right)) = integer_operands(lhs, rhs, family) else {
        unreachable!("integer plan for {:?} {} {:?}", lhs, op, rhs);
    };
    let format = storage_format(lhs, left, format);
    let policy = config.internal_value;

    if op == Operator::Divide {
        if right == 0 {
            return division_by_zero(config);
        }
        if left % right != 0 {
            tracing::trace!("{} / {} is inexact, promoting to Float64", left, right);
            return Ok(Some(Value::Float64(left as f64 / right as f64)));
        }
    }

    if policy == InternalValuePolicy::Saturate && format != Format::Bool {
        return saturate_integer(format, left, op, right).map(Some);
    }

    // 64-bit operands cannot overflow i128 except u64 * u64
    let exact = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply if policy == InternalValuePolicy::Overflow => left.wrapping_mul(right),
        Operator::Multiply => left.saturating_mul(right),
        Operator::Divide => left / right,
    };

    Ok(Some(store_integer(exact, format, policy)))
}

/// Store an exact integer result under the internal value policy.
fn store_integer(exact: i128, format: Format, policy: InternalValuePolicy) -> Value {
    match policy {
        InternalValuePolicy::Overflow => Value::wrapping_from_integer(format, exact),
        InternalValuePolicy::Saturate => Value::saturating_from_integer(format, exact),
        InternalValuePolicy::TypePromotion => {
            let mut target = format;
            while !target.fits(exact) {
                match target.next_wider() {
                    Some(wider) => target = wider,
                    None => {
                        tracing::trace!("{} exceeds {}, saturating", exact, target);
                        return Value::saturating_from_integer(target, exact);
                    }
                }
            }
            if target != format {
                tracing::trace!("Promoted {} to {} to hold {}", format, target, exact);
            }
            Value::wrapping_from_integer(target, exact)
        }
    }
}

// ============================================================================
// Saturating Store
// ============================================================================

/// `left op right` computed in `format` with the numeric layer's saturating
/// primitives. `left` must fit `format`.
fn saturate_integer(format: Format, left: i128, op: Operator, right: i128) -> NumericResult<Value> {
    Ok(match format {
        Format::UInt8 => Value::UInt8(saturating_op(left, op, right)?),
        Format::SInt8 => Value::SInt8(saturating_op(left, op, right)?),
        Format::UInt16 => Value::UInt16(saturating_op(left, op, right)?),
        Format::SInt16 => Value::SInt16(saturating_op(left, op, right)?),
        Format::UInt32 => Value::UInt32(saturating_op(left, op, right)?),
        Format::SInt32 => Value::SInt32(saturating_op(left, op, right)?),
        Format::UInt64 => Value::UInt64(saturating_op(left, op, right)?),
        Format::SInt64 => Value::SInt64(saturating_op(left, op, right)?),
        other => unreachable!("saturating integer store into {}", other),
    })
}

fn saturating_op<T: NumericLimits>(left: i128, op: Operator, right: i128) -> NumericResult<T> {
    let mut acc = saturate_from_i128::<T>(left);
    // operands are 64-bit: anything above i64::MAX is a u64
    let clamped = match i64::try_from(right) {
        Ok(right) => apply_saturating(&mut acc, op, right)?,
        Err(_) => apply_saturating(&mut acc, op, right as u64)?,
    };
    if clamped {
        tracing::trace!("{} {} {} saturated to {}", left, op, right, acc);
    }
    Ok(acc)
}

fn apply_saturating<T: NumericLimits, R: NumericLimits>(
    acc: &mut T,
    op: Operator,
    right: R,
) -> NumericResult<bool> {
    Ok(match op {
        Operator::Add => saturate_add(acc, right),
        Operator::Subtract => saturate_sub(acc, right),
        Operator::Multiply => saturate_mul(acc, right),
        Operator::Divide => saturate_div(acc, right)?,
    })
}

// ============================================================================
// Floating Point
// ============================================================================

fn float(
    lhs: &Value,
    op: Operator,
    rhs: &Value,
    format: Format,
    config: &VariantConfig,
) -> NumericResult<Option<Value>> {
    let (Some(left), Some(right)) = (lhs.as_float(), rhs.as_float()) else {
        unreachable!("float plan for {:?} {} {:?}", lhs, op, rhs);
    };

    let exact = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return division_by_zero(config);
            }
            left / right
        }
    };

    Ok(Some(store_float(exact, format, config.internal_value)))
}

/// Floats never widen; only `Saturate` clamps out-of-range results.
fn store_float(exact: f64, format: Format, policy: InternalValuePolicy) -> Value {
    let saturate = policy == InternalValuePolicy::Saturate;
    match format {
        Format::Float32 if saturate => Value::Float32(saturate_cast::<f32, f64>(exact)),
        Format::Float32 => Value::Float32(exact as f32),
        _ if saturate => Value::Float64(saturate_cast::<f64, f64>(exact)),
        _ => Value::Float64(exact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(lhs: Value, op: Operator, rhs: Value) -> Option<Value> {
        evaluate(&lhs, op, &rhs, &VariantConfig::new()).unwrap()
    }

    fn eval_with(lhs: Value, op: Operator, rhs: Value, config: VariantConfig) -> Option<Value> {
        evaluate(&lhs, op, &rhs, &config).unwrap()
    }

    #[test]
    fn test_unsigned_receiver_signed_operand_promotes() {
        assert_eq!(
            eval(Value::UInt8(250), Operator::Add, Value::SInt8(10)),
            Some(Value::SInt16(260))
        );
        assert_eq!(
            eval(Value::UInt16(4), Operator::Multiply, Value::SInt16(10)),
            Some(Value::SInt16(40))
        );
        assert_eq!(
            eval(Value::UInt8(4), Operator::Multiply, Value::SInt8(-2)),
            Some(Value::SInt8(-8))
        );
    }

    #[test]
    fn test_large_u64_receiver_keeps_unsigned_storage() {
        assert_eq!(
            eval(Value::UInt64(u64::MAX), Operator::Add, Value::SInt8(-1)),
            Some(Value::UInt64(u64::MAX - 1))
        );
        assert_eq!(
            eval(Value::UInt64(u64::MAX), Operator::Add, Value::SInt8(1)),
            Some(Value::UInt64(u64::MAX))
        );
        assert_eq!(
            eval(Value::UInt64(1 << 63), Operator::Multiply, Value::SInt8(-1)),
            Some(Value::UInt64(0))
        );
        // fits the signed counterpart: ordinary signed arithmetic
        assert_eq!(
            eval(Value::UInt64(5), Operator::Subtract, Value::SInt64(9)),
            Some(Value::SInt64(-4))
        );
    }

    #[test]
    fn test_mixed_signedness_keeps_receiver_under_every_policy() {
        for config in [VariantConfig::wrapping(), VariantConfig::saturating(), VariantConfig::new()] {
            assert_eq!(
                eval_with(Value::UInt8(200), Operator::Add, Value::SInt8(0), config),
                Some(Value::SInt16(200)),
                "{:?}",
                config
            );
            assert_eq!(
                eval_with(Value::UInt8(200), Operator::Subtract, Value::SInt8(1), config),
                Some(Value::SInt16(199)),
                "{:?}",
                config
            );
            assert_eq!(
                eval_with(Value::UInt32(u32::MAX), Operator::Multiply, Value::SInt16(1), config),
                Some(Value::SInt64(u32::MAX as i64)),
                "{:?}",
                config
            );
            assert_eq!(
                eval_with(Value::UInt64(u64::MAX), Operator::Divide, Value::SInt8(1), config),
                Some(Value::UInt64(u64::MAX)),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn test_saturate_policy_on_mixed_signedness() {
        let config = VariantConfig::saturating();
        assert_eq!(
            eval_with(Value::UInt8(100), Operator::Multiply, Value::SInt8(-2), config),
            Some(Value::SInt8(-128))
        );
        assert_eq!(
            eval_with(Value::UInt8(200), Operator::Add, Value::SInt8(100), config),
            Some(Value::SInt16(300))
        );
        assert_eq!(
            eval_with(Value::SInt8(-100), Operator::Subtract, Value::UInt64(u64::MAX), config),
            Some(Value::SInt64(i64::MIN))
        );
        assert_eq!(
            eval_with(Value::UInt64(u64::MAX), Operator::Divide, Value::SInt8(-1), config),
            Some(Value::UInt64(0))
        );
        assert_eq!(
            eval_with(Value::SInt16(i16::MIN), Operator::Divide, Value::SInt8(-1), config),
            Some(Value::SInt16(i16::MAX))
        );
    }

    #[test]
    fn test_overflow_policy_on_mixed_signedness() {
        let config = VariantConfig::wrapping();
        assert_eq!(
            eval_with(Value::UInt8(100), Operator::Multiply, Value::SInt8(-2), config),
            Some(Value::SInt8(56))
        );
        assert_eq!(
            eval_with(Value::SInt8(127), Operator::Add, Value::UInt8(1), config),
            Some(Value::SInt8(-128))
        );
        assert_eq!(
            eval_with(Value::UInt64(u64::MAX), Operator::Add, Value::SInt8(1), config),
            Some(Value::UInt64(0))
        );
    }

    #[test]
    fn test_signed_receiver_unsigned_operand() {
        assert_eq!(
            eval(Value::SInt8(-1), Operator::Add, Value::UInt32(10)),
            Some(Value::SInt32(9))
        );
        // operand saturates into i64
        assert_eq!(
            eval(Value::SInt64(0), Operator::Add, Value::UInt64(u64::MAX)),
            Some(Value::SInt64(i64::MAX))
        );
    }

    #[test]
    fn test_type_promotion_cascades() {
        assert_eq!(
            eval(Value::UInt8(255), Operator::Add, Value::UInt8(1)),
            Some(Value::UInt16(256))
        );
        assert_eq!(
            eval(Value::UInt16(60000), Operator::Multiply, Value::UInt16(60000)),
            Some(Value::UInt32(3_600_000_000))
        );
        assert_eq!(
            eval(Value::SInt8(-128), Operator::Subtract, Value::SInt8(1)),
            Some(Value::SInt16(-129))
        );
        assert_eq!(
            eval(Value::Bool(true), Operator::Add, Value::Bool(true)),
            Some(Value::UInt8(2))
        );
    }

    #[test]
    fn test_type_promotion_saturates_at_64_bits() {
        assert_eq!(
            eval(Value::UInt64(u64::MAX), Operator::Add, Value::UInt8(1)),
            Some(Value::UInt64(u64::MAX))
        );
        assert_eq!(
            eval(Value::UInt8(3), Operator::Subtract, Value::UInt8(5)),
            Some(Value::UInt64(0))
        );
    }

    #[test]
    fn test_overflow_policy_wraps() {
        let config = VariantConfig::wrapping();
        assert_eq!(
            eval_with(Value::UInt8(250), Operator::Add, Value::UInt8(10), config),
            Some(Value::UInt8(4))
        );
        assert_eq!(
            eval_with(Value::SInt8(127), Operator::Add, Value::SInt8(1), config),
            Some(Value::SInt8(-128))
        );
        assert_eq!(
            eval_with(Value::UInt64(u64::MAX), Operator::Multiply, Value::UInt64(u64::MAX), config),
            Some(Value::UInt64(1))
        );
    }

    #[test]
    fn test_saturate_policy_clamps() {
        let config = VariantConfig::saturating();
        assert_eq!(
            eval_with(Value::UInt8(250), Operator::Add, Value::UInt8(10), config),
            Some(Value::UInt8(255))
        );
        assert_eq!(
            eval_with(Value::SInt16(-30000), Operator::Subtract, Value::SInt16(5000), config),
            Some(Value::SInt16(i16::MIN))
        );
        assert_eq!(
            eval_with(Value::Float32(f32::MAX), Operator::Multiply, Value::Float32(2.0), config),
            Some(Value::Float32(f32::MAX))
        );
    }

    #[test]
    fn test_inexact_division_promotes_to_float64() {
        assert_eq!(
            eval(Value::UInt8(5), Operator::Divide, Value::UInt8(2)),
            Some(Value::Float64(2.5))
        );
        assert_eq!(
            eval(Value::UInt8(6), Operator::Divide, Value::UInt8(2)),
            Some(Value::UInt8(3))
        );
        assert_eq!(
            eval(Value::SInt8(-128), Operator::Divide, Value::SInt8(-1)),
            Some(Value::SInt16(128))
        );
    }

    #[test]
    fn test_division_by_zero_policies() {
        let result = evaluate(
            &Value::UInt8(5),
            Operator::Divide,
            &Value::UInt8(0),
            &VariantConfig::new(),
        );
        assert_eq!(result, Err(NumericError::DivisionByZero));

        let result = evaluate(
            &Value::Float64(5.0),
            Operator::Divide,
            &Value::Float32(0.0),
            &VariantConfig::new(),
        );
        assert_eq!(result, Err(NumericError::DivisionByZero));

        assert_eq!(
            eval_with(Value::UInt8(5), Operator::Divide, Value::UInt8(0), VariantConfig::lenient()),
            None
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            eval(Value::Float32(1.5), Operator::Add, Value::Float64(1.0)),
            Some(Value::Float64(2.5))
        );
        assert_eq!(
            eval(Value::UInt8(3), Operator::Multiply, Value::Float32(0.5)),
            Some(Value::Float32(1.5))
        );
        assert_eq!(
            eval(Value::Float32(f32::MAX), Operator::Multiply, Value::Float32(2.0)),
            Some(Value::Float32(f32::INFINITY))
        );
    }

    #[test]
    fn test_text_operands() {
        assert_eq!(
            eval(Value::String("5".into()), Operator::Add, Value::SInt32(1)),
            Some(Value::SInt32(6))
        );
        assert_eq!(
            eval(Value::String("foo".into()), Operator::Add, Value::SInt32(1)),
            Some(Value::String("foo1".into()))
        );
        assert_eq!(
            eval(Value::String("ab".into()), Operator::Add, Value::String("12".into())),
            Some(Value::String("ab12".into()))
        );
        assert_eq!(
            eval(Value::String("9".into()), Operator::Subtract, Value::String("4".into())),
            Some(Value::SInt8(5))
        );
        assert_eq!(
            eval(Value::String("foo".into()), Operator::Multiply, Value::UInt8(2)),
            None
        );
        assert_eq!(
            eval(Value::UInt8(7), Operator::Add, Value::String("px".into())),
            Some(Value::String("7px".into()))
        );
    }

    #[test]
    fn test_partial_simplification_is_not_committed() {
        assert_eq!(
            eval(Value::String("5".into()), Operator::Multiply, Value::String("x".into())),
            None
        );
    }
}
