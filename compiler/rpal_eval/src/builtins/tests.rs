#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;
use rpal_ir::{ControlUnit, Params};
use rpal_values::{Closure, Environment, EvalErrorKind};

fn call(builtin: Builtin, rand: &Value) -> Value {
    evaluate_builtin(builtin, rand, None).unwrap()
}

fn closure() -> Closure {
    Closure::new(
        ControlUnit::shared(1, Params::new(), Vec::new()),
        Environment::root(),
    )
}

#[test]
fn type_predicates() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(call(Builtin::IsInteger, &Value::int(1)), t);
    assert_eq!(call(Builtin::IsInteger, &Value::string("1")), f);
    assert_eq!(call(Builtin::IsString, &Value::string("")), t);
    assert_eq!(call(Builtin::IsTuple, &Value::nil()), t);
    assert_eq!(call(Builtin::IsDummy, &Value::Dummy), t);
    assert_eq!(call(Builtin::IsTruthValue, &Value::Bool(false)), t);
    assert_eq!(call(Builtin::IsTruthValue, &Value::int(0)), f);
}

#[test]
fn isfunction_recognizes_only_lambda_closures() {
    assert_eq!(
        call(Builtin::IsFunction, &Value::Closure(closure())),
        Value::Bool(true)
    );
    assert_eq!(
        call(Builtin::IsFunction, &Value::RecursiveClosure(closure())),
        Value::Bool(false)
    );
    assert_eq!(
        call(Builtin::IsFunction, &Value::Builtin(Builtin::Print)),
        Value::Bool(false)
    );
    assert_eq!(call(Builtin::IsFunction, &Value::int(3)), Value::Bool(false));
}

#[test]
fn stem_and_stern() {
    assert_eq!(call(Builtin::Stem, &Value::string("hello")), Value::string("h"));
    assert_eq!(call(Builtin::Stern, &Value::string("hello")), Value::string("ello"));
    assert_eq!(call(Builtin::Stem, &Value::string("")), Value::string(""));
    assert_eq!(call(Builtin::Stern, &Value::string("")), Value::string(""));
    assert_eq!(call(Builtin::Stern, &Value::string("a")), Value::string(""));
}

#[test]
fn stem_takes_a_whole_character() {
    assert_eq!(call(Builtin::Stem, &Value::string("éa")), Value::string("é"));
    assert_eq!(call(Builtin::Stern, &Value::string("éa")), Value::string("a"));
}

#[test]
fn stem_requires_a_string() {
    let err = evaluate_builtin(Builtin::Stem, &Value::int(1), None).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeError {
            expected: "a string".to_string(),
            got: "1".to_string(),
        }
    );
    assert_eq!(err.notes, vec!["while evaluating Stem".to_string()]);
}

#[test]
fn itos() {
    assert_eq!(call(Builtin::ItoS, &Value::int(-42)), Value::string("-42"));
    assert!(evaluate_builtin(Builtin::ItoS, &Value::string("4"), None).is_err());
}

#[test]
fn order_and_null() {
    let t = Value::tuple(vec![Value::int(1), Value::int(2), Value::int(3)]);
    assert_eq!(call(Builtin::Order, &t), Value::int(3));
    assert_eq!(call(Builtin::Order, &Value::nil()), Value::int(0));
    assert_eq!(call(Builtin::Null, &Value::nil()), Value::Bool(true));
    assert_eq!(call(Builtin::Null, &t), Value::Bool(false));
    assert!(evaluate_builtin(Builtin::Order, &Value::int(1), None).is_err());
    assert!(evaluate_builtin(Builtin::Null, &Value::Dummy, None).is_err());
}

#[test]
fn print_yields_dummy() {
    assert_eq!(call(Builtin::Print, &Value::int(1)), Value::Dummy);
}

#[test]
fn neg() {
    assert_eq!(call(Builtin::Neg, &Value::int(4)), Value::int(-4));
    assert!(evaluate_builtin(Builtin::Neg, &Value::Bool(true), None).is_err());
}

#[test]
fn conc_joins_in_operand_order() {
    assert_eq!(
        conc(&Value::string("ab"), &Value::string("cd")).unwrap(),
        Value::string("abcd")
    );
}

#[test]
fn conc_requires_strings() {
    let err = conc(&Value::string("a"), &Value::int(1)).unwrap_err();
    assert_eq!(err.message, "expected two strings; was given 'a' and 1");
}

#[test]
fn conc_takes_its_second_operand() {
    assert_eq!(
        evaluate_builtin(Builtin::Conc, &Value::string("a"), Some(&Value::string("b"))).unwrap(),
        Value::string("ab")
    );
}

#[test]
fn conc_alone_is_missing_an_operand() {
    let err = evaluate_builtin(Builtin::Conc, &Value::string("a"), None).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingOperand {
            operator: "Conc".to_string()
        }
    );
}

#[test]
fn print_text_unescapes() {
    assert_eq!(print_text(&Value::string(r"a\tb\nc")), "a\tb\nc");
    assert_eq!(print_text(&Value::string(r"back\slash\")), r"back\slash\");
    assert_eq!(print_text(&Value::int(7)), "7");
    assert_eq!(
        print_text(&Value::tuple(vec![Value::int(1), Value::string("x")])),
        "(1, x)"
    );
}
