//! The built-in function library.
//!
//! Built-ins are reached only through application, and only the machine
//! applies them: `Print` records output and `Conc` takes its second operand
//! off the control stack, so both need machine state around
//! [`evaluate_builtin`].

use rpal_ir::Builtin;
use rpal_values::{type_error, EvalResult, Value};

use crate::unary_operators::negate;

/// Apply `builtin` to its operands.
///
/// `second` is the operand of the following application for built-ins of
/// arity two, `None` otherwise. `Print` only yields `dummy` here; the machine
/// records its text before calling this.
pub(crate) fn evaluate_builtin(
    builtin: Builtin,
    rand: &Value,
    second: Option<&Value>,
) -> EvalResult {
    match builtin {
        Builtin::IsInteger => Ok(Value::Bool(matches!(rand, Value::Int(_)))),
        Builtin::IsString => Ok(Value::Bool(matches!(rand, Value::Str(_)))),
        Builtin::IsTuple => Ok(Value::Bool(matches!(rand, Value::Tuple(_)))),
        Builtin::IsDummy => Ok(Value::Bool(matches!(rand, Value::Dummy))),
        Builtin::IsTruthValue => Ok(Value::Bool(matches!(rand, Value::Bool(_)))),
        // An eta closure does not count as a function.
        Builtin::IsFunction => Ok(Value::Bool(matches!(rand, Value::Closure(_)))),
        Builtin::Stem => with_string(builtin, rand, |s| {
            s.chars().next().map(String::from).unwrap_or_default()
        }),
        Builtin::Stern => with_string(builtin, rand, |s| {
            let mut chars = s.chars();
            chars.next();
            chars.as_str().to_string()
        }),
        Builtin::ItoS => match rand {
            Value::Int(n) => Ok(Value::string(n.to_string())),
            other => Err(expected(builtin, "an integer", other)),
        },
        Builtin::Order => match rand {
            Value::Tuple(t) => i64::try_from(t.order())
                .map(Value::Int)
                .map_err(|_| rpal_values::integer_overflow("Order")),
            other => Err(expected(builtin, "a tuple", other)),
        },
        Builtin::Null => match rand {
            Value::Tuple(t) => Ok(Value::Bool(t.is_null())),
            other => Err(expected(builtin, "a tuple", other)),
        },
        Builtin::Neg => match rand {
            Value::Int(n) => negate(*n),
            other => Err(expected(builtin, "an integer", other)),
        },
        Builtin::Print => Ok(Value::Dummy),
        Builtin::Conc => match second {
            Some(second) => conc(rand, second),
            None => Err(rpal_values::missing_operand(builtin.name())),
        },
    }
}

/// `Conc first second`: both strings, concatenated in operand order.
pub(crate) fn conc(first: &Value, second: &Value) -> EvalResult {
    match (first, second) {
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => Err(type_error(
            "two strings",
            &format!("{} and {}", first.describe(), second.describe()),
        )
        .with_note("while evaluating Conc")),
    }
}

/// The text `Print` records: the value's display form with `\t` and `\n`
/// escape sequences turned into tab and newline.
pub(crate) fn print_text(value: &Value) -> String {
    let text = value.to_string();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('t') => {
                    chars.next();
                    out.push('\t');
                    continue;
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    out
}

fn with_string(builtin: Builtin, rand: &Value, f: impl FnOnce(&str) -> String) -> EvalResult {
    match rand {
        Value::Str(s) => Ok(Value::string(f(s))),
        other => Err(expected(builtin, "a string", other)),
    }
}

#[cold]
fn expected(builtin: Builtin, kind: &str, got: &Value) -> rpal_values::EvalError {
    type_error(kind, &got.describe()).with_note(format!("while evaluating {builtin}"))
}

#[cfg(test)]
mod tests;
