//! Binary operator application

use crate::error::{EvalError, Result};
use crate::token::Operator;

/// Apply `op` to two operands in source order: `lhs op rhs`.
///
/// In postfix order `rhs` is the more recently pushed operand. Division by
/// exactly zero is rejected instead of producing an infinity or NaN.
pub fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
    }
}
