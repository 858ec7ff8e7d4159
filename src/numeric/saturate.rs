// ============================================================================
// Saturating Casts and Arithmetic
// Clamp-instead-of-overflow primitives shared by every higher layer
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::limits::NumericLimits;

// ============================================================================
// Range Intersection
// ============================================================================

/// Common range of `A` and `B` as exact integers.
#[inline]
fn integer_intersection<A: NumericLimits, B: NumericLimits>() -> (i128, i128) {
    (
        A::MIN.to_i128().max(B::MIN.to_i128()),
        A::MAX.to_i128().min(B::MAX.to_i128()),
    )
}

/// Common range of `A` and `B` in `f64`.
#[inline]
fn float_intersection<A: NumericLimits, B: NumericLimits>() -> (f64, f64) {
    (
        A::MIN.to_f64().max(B::MIN.to_f64()),
        A::MAX.to_f64().min(B::MAX.to_f64()),
    )
}

// ============================================================================
// Casts
// ============================================================================

/// Cast `value` to `Out`, clamping into the range both types can represent.
///
/// The returned value always lies within `[Out::MIN, Out::MAX]`, and casting it
/// back to `In` yields the clamped source. Infinities clamp to the float
/// bounds; NaN goes through the native cast (NaN for floats, zero for
/// integers).
///
/// # Example
/// ```
/// use scalar_variant::numeric::saturate_cast;
///
/// assert_eq!(saturate_cast::<u8, i32>(300), 255);
/// assert_eq!(saturate_cast::<u8, i32>(-5), 0);
/// assert_eq!(saturate_cast::<i16, f64>(1e9), i16::MAX);
/// ```
#[inline]
pub fn saturate_cast<Out: NumericLimits, In: NumericLimits>(value: In) -> Out {
    if In::IS_FLOATING || Out::IS_FLOATING {
        let wide = value.to_f64();
        if wide.is_nan() {
            return Out::from_f64(wide);
        }
        let (lo, hi) = float_intersection::<Out, In>();
        Out::from_f64(wide.clamp(lo, hi))
    } else {
        let (lo, hi) = integer_intersection::<Out, In>();
        Out::from_i128(value.to_i128().clamp(lo, hi))
    }
}

/// Clamp an exact integer into `T`.
#[inline]
pub fn saturate_from_i128<T: NumericLimits>(value: i128) -> T {
    if T::IS_FLOATING {
        T::from_f64(value as f64)
    } else {
        T::from_i128(value.clamp(T::MIN.to_i128(), T::MAX.to_i128()))
    }
}

// ============================================================================
// In-Place Arithmetic
// ============================================================================

/// Store `exact` into `left`, clamping when out of range. Returns whether it clamped.
#[inline]
fn store_integer<T: NumericLimits>(left: &mut T, exact: i128) -> bool {
    let clamped = exact.clamp(T::MIN.to_i128(), T::MAX.to_i128());
    *left = T::from_i128(clamped);
    clamped != exact
}

/// Store a float result; only finite operands that overflowed are clamped.
#[inline]
fn store_float<T: NumericLimits>(left: &mut T, exact: f64, finite_operands: bool) -> bool {
    let (lo, hi) = (T::MIN.to_f64(), T::MAX.to_f64());
    if finite_operands && !exact.is_nan() && (exact < lo || exact > hi) {
        *left = if exact > hi { T::MAX } else { T::MIN };
        true
    } else {
        *left = T::from_f64(exact);
        false
    }
}

/// Whether the operation between `L` and `R` runs in `f64`.
#[inline]
fn floating<L: NumericLimits, R: NumericLimits>() -> bool {
    L::IS_FLOATING || R::IS_FLOATING
}

/// `left += right`, clamped to `L`'s bounds on overflow or underflow.
///
/// `right` may be of any numeric type; integer pairs are summed exactly
/// before clamping. Returns `true` when the result was clamped.
#[inline]
pub fn saturate_add<L: NumericLimits, R: NumericLimits>(left: &mut L, right: R) -> bool {
    if floating::<L, R>() {
        let (l, r) = (left.to_f64(), right.to_f64());
        store_float(left, l + r, l.is_finite() && r.is_finite())
    } else {
        let exact = left.to_i128() + right.to_i128();
        store_integer(left, exact)
    }
}

/// `left -= right`, clamped to `L`'s bounds on overflow or underflow.
#[inline]
pub fn saturate_sub<L: NumericLimits, R: NumericLimits>(left: &mut L, right: R) -> bool {
    if floating::<L, R>() {
        let (l, r) = (left.to_f64(), right.to_f64());
        store_float(left, l - r, l.is_finite() && r.is_finite())
    } else {
        let exact = left.to_i128() - right.to_i128();
        store_integer(left, exact)
    }
}

/// `left *= right`, clamped to `L`'s bounds on overflow or underflow.
#[inline]
pub fn saturate_mul<L: NumericLimits, R: NumericLimits>(left: &mut L, right: R) -> bool {
    if floating::<L, R>() {
        let (l, r) = (left.to_f64(), right.to_f64());
        store_float(left, l * r, l.is_finite() && r.is_finite())
    } else {
        // u64 * u64 can exceed i128; saturating keeps the sign
        let exact = left.to_i128().saturating_mul(right.to_i128());
        store_integer(left, exact)
    }
}

/// `left /= right`, clamped to `L`'s bounds.
///
/// Integer division truncates toward zero. Special cases:
/// - signed `MIN / -1` saturates to `MAX`
/// - an unsigned `left` divided by a negative `right` saturates to `MIN` (zero)
///
/// # Errors
/// Returns `DivisionByZero` (leaving `left` untouched) when `right` is zero.
#[inline]
pub fn saturate_div<L: NumericLimits, R: NumericLimits>(
    left: &mut L,
    right: R,
) -> NumericResult<bool> {
    if floating::<L, R>() {
        let (l, r) = (left.to_f64(), right.to_f64());
        if r == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        return Ok(store_float(left, l / r, l.is_finite() && r.is_finite()));
    }

    let divisor = right.to_i128();
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }
    if !L::IS_SIGNED && divisor < 0 {
        let clamped = *left != L::MIN;
        *left = L::MIN;
        return Ok(clamped);
    }
    Ok(store_integer(left, left.to_i128() / divisor))
}
