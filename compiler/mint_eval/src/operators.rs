//! Binary operator implementations.
//!
//! Direct enum-based dispatch over the fixed operator set. Operands arrive
//! already evaluated (left before right, no short-circuiting); comparisons
//! yield `1`/`0` since the language has no boolean type.

use mint_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};

/// Apply a binary operator to two evaluated operands.
///
/// Arithmetic wraps on overflow (the language defines a single fixed-width
/// integer type and no overflow check). Division is integer division; a
/// zero divisor is a checked `DivisionByZero` error.
pub fn evaluate_binary(lhs: i64, rhs: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(lhs.wrapping_add(rhs)),
        BinaryOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinaryOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinaryOp::Div => {
            if rhs == 0 {
                Err(division_by_zero())
            } else {
                // wrapping_div: i64::MIN / -1 wraps instead of trapping.
                Ok(lhs.wrapping_div(rhs))
            }
        }
        BinaryOp::Eq => Ok(i64::from(lhs == rhs)),
        BinaryOp::NotEq => Ok(i64::from(lhs != rhs)),
        BinaryOp::Lt => Ok(i64::from(lhs < rhs)),
        BinaryOp::Gt => Ok(i64::from(lhs > rhs)),
        BinaryOp::LtEq => Ok(i64::from(lhs <= rhs)),
        BinaryOp::GtEq => Ok(i64::from(lhs >= rhs)),
    }
}
