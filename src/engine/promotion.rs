// ============================================================================
// Promotion Rules
// Decide the family and result format of a mixed-format binary operation
// ============================================================================

use crate::domain::{Family, Format};
use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How an operation between two formats is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Exact integer arithmetic in the given family; `format` is the result
    /// format before the internal value policy is applied
    Integer { family: Family, format: Format },

    /// `f64` arithmetic stored back as `format`
    Float { format: Format },

    /// Join the textual forms of both operands
    Concatenate,

    /// At least one side is text: simplify and resolve again
    Simplify,
}

/// Resolve the arithmetic plan for `lhs op rhs`.
///
/// Rules, in order:
/// - two strings under `+` concatenate; any other string operand needs simplification
/// - any floating side makes the operation floating, `f64` if both are floating
/// - same-signedness integers stay in their family
/// - signed receiver with unsigned operand: the signed representation wins
/// - unsigned receiver with signed operand: the plan uses the receiver's
///   same-width signed counterpart; the evaluator widens storage further if
///   the receiver's value needs it
///
/// Mixed widths take the wider format of the pair.
pub fn resolve(lhs: Format, rhs: Format, op: Operator) -> Plan {
    match (lhs.family(), rhs.family()) {
        (None, None) if op == Operator::Add => Plan::Concatenate,
        (None, _) | (_, None) => Plan::Simplify,

        (Some(Family::Float), Some(Family::Float)) => Plan::Float {
            format: lhs.wider(rhs),
        },
        (Some(Family::Float), Some(_)) => Plan::Float { format: lhs },
        (Some(_), Some(Family::Float)) => Plan::Float { format: rhs },

        (Some(Family::Unsigned), Some(Family::Unsigned)) => Plan::Integer {
            family: Family::Unsigned,
            format: lhs.wider(rhs),
        },
        (Some(Family::Signed), Some(Family::Signed)) => Plan::Integer {
            family: Family::Signed,
            format: lhs.wider(rhs),
        },
        (Some(Family::Signed), Some(Family::Unsigned)) => Plan::Integer {
            family: Family::Signed,
            format: lhs.wider(rhs.signed_counterpart()),
        },
        (Some(Family::Unsigned), Some(Family::Signed)) => Plan::Integer {
            family: Family::Signed,
            format: lhs.signed_counterpart().wider(rhs),
        },
    }
}
