//! Unary operator implementations for the machine.

use rpal_ir::UnaryOp;
use rpal_values::{integer_overflow, type_error, EvalResult, Value};

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (Value::Int(n), UnaryOp::Neg) => negate(*n),
        (other, UnaryOp::Not) => Err(type_error("a truthvalue", &other.describe())),
        (other, UnaryOp::Neg) => Err(type_error("an integer", &other.describe())),
    }
}

/// Checked integer negation, shared with the `neg` built-in.
pub(crate) fn negate(n: i64) -> EvalResult {
    n.checked_neg()
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("negation"))
}
