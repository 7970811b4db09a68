use super::Var;
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Pure walk of an expression tree against the variable store.
/// Arithmetic wraps; division truncates toward zero and a zero
/// divisor is DIVIDE BY ZERO.
pub fn evaluate(expr: &Expression, vars: &Var) -> Result<i64> {
    use Expression::*;
    match expr {
        Literal(_, n) => Ok(*n),
        Var(col, name) => match vars.fetch(name) {
            Ok(val) => Ok(val),
            Err(e) => Err(e.in_column(col)),
        },
        Group(_, inner) => evaluate(inner, vars),
        Add(_, lhs, rhs) => Ok(evaluate(lhs, vars)?.wrapping_add(evaluate(rhs, vars)?)),
        Subtract(_, lhs, rhs) => Ok(evaluate(lhs, vars)?.wrapping_sub(evaluate(rhs, vars)?)),
        Multiply(_, lhs, rhs) => Ok(evaluate(lhs, vars)?.wrapping_mul(evaluate(rhs, vars)?)),
        Divide(col, lhs, rhs) => {
            let divisor = evaluate(rhs, vars)?;
            if divisor == 0 {
                return Err(error!(DivideByZero, ..col));
            }
            Ok(evaluate(lhs, vars)?.wrapping_div(divisor))
        }
    }
}
