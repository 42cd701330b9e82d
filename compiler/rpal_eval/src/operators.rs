//! Binary operator implementations for the machine.
//!
//! Direct enum-based dispatch: the operator set is fixed, so pattern
//! matching is used over trait objects.
//!
//! `left` is the first operand popped (the left operand in the source) and
//! `right` the second.

use rpal_ir::BinaryOp;
use rpal_values::{
    dissimilar_types, division_by_zero, integer_overflow, not_a_tuple, type_error,
    unsupported_comparison, unsupported_operands, EvalResult, Value,
};

/// Checked arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation.
#[expect(
    clippy::needless_pass_by_value,
    reason = "operands are popped off the value stack and owned by the caller"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => int_op(&left, &right, |a, b| checked_arith(a.checked_add(b), "addition")),
        BinaryOp::Sub => {
            int_op(&left, &right, |a, b| checked_arith(a.checked_sub(b), "subtraction"))
        }
        BinaryOp::Mul => {
            int_op(&left, &right, |a, b| checked_arith(a.checked_mul(b), "multiplication"))
        }
        BinaryOp::Div => int_op(&left, &right, int_div),
        BinaryOp::Pow => int_op(&left, &right, int_pow),
        BinaryOp::Lt => int_op(&left, &right, |a, b| Ok(Value::Bool(a < b))),
        BinaryOp::LtEq => int_op(&left, &right, |a, b| Ok(Value::Bool(a <= b))),
        BinaryOp::Gt => int_op(&left, &right, |a, b| Ok(Value::Bool(a > b))),
        BinaryOp::GtEq => int_op(&left, &right, |a, b| Ok(Value::Bool(a >= b))),
        BinaryOp::Eq | BinaryOp::NotEq => eval_equality(&left, &right, op),
        BinaryOp::Or | BinaryOp::And => eval_logical(&left, &right, op),
        BinaryOp::Aug => eval_aug(&left, right),
    }
}

/// Arithmetic and relational operators take two integers.
fn int_op(left: &Value, right: &Value, f: impl FnOnce(i64, i64) -> EvalResult) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => f(*a, *b),
        _ => Err(type_error(
            "two integers",
            &format!("{} and {}", left.describe(), right.describe()),
        )),
    }
}

/// Truncating division.
fn int_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Integer exponentiation.
///
/// A negative exponent truncates the real power toward zero: only bases 1
/// and -1 give a non-zero result, and base 0 has no finite result.
fn int_pow(base: i64, exp: i64) -> EvalResult {
    if exp < 0 {
        return match base {
            0 => Err(division_by_zero()),
            1 => Ok(Value::Int(1)),
            -1 => Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
            _ => Ok(Value::Int(0)),
        };
    }
    match (base, u32::try_from(exp)) {
        (_, Ok(exp)) => checked_arith(base.checked_pow(exp), "exponentiation"),
        // Exponents past u32 only stay in range for these bases.
        (0 | 1, Err(_)) => Ok(Value::Int(base)),
        (-1, Err(_)) => Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
        (_, Err(_)) => Err(integer_overflow("exponentiation")),
    }
}

/// `eq` / `ne`.
///
/// A truth value only compares with a truth value. Otherwise both operands
/// must share a kind, and that kind must be integer or string.
fn eval_equality(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let equal = match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        _ if std::mem::discriminant(left) == std::mem::discriminant(right)
            && !matches!(left, Value::Bool(_)) =>
        {
            return Err(unsupported_comparison(
                op,
                &left.describe(),
                &right.describe(),
            ));
        }
        _ => return Err(dissimilar_types(&left.describe(), &right.describe())),
    };
    Ok(Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }))
}

/// `or` / `&`. Both operands are already evaluated; nothing short-circuits.
fn eval_logical(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if op == BinaryOp::Or {
            *a || *b
        } else {
            *a && *b
        })),
        _ => Err(unsupported_operands(
            op,
            &left.describe(),
            &right.describe(),
        )),
    }
}

/// `aug`: append `right` to the tuple `left` in place and return that same
/// tuple.
fn eval_aug(left: &Value, right: Value) -> EvalResult {
    match left {
        Value::Tuple(tuple) => {
            tuple.augment(right);
            Ok(Value::Tuple(tuple.clone()))
        }
        other => Err(not_a_tuple(&other.describe())),
    }
}
