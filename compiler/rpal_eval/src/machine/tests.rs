#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;
use rpal_ir::{BinaryOp, ControlUnit, Literal, Params, Term, Tree};
use rpal_values::EvalErrorKind;

fn run_with(term: Term, max_depth: Option<usize>) -> Result<Outcome, EvalError> {
    let interner = StringInterner::new();
    let program = rpal_canon::lower(&Tree::standardized(term), &interner).unwrap();
    let handler = PrintHandlerImpl::Silent;
    Machine::new(&interner, &handler, max_depth).run(program.root())
}

fn eval(term: Term) -> Value {
    run_with(term, None).unwrap().value.unwrap()
}

fn eval_err(term: Term) -> EvalError {
    run_with(term, None).err().unwrap()
}

fn apply(rator: Term, rand: Term) -> Term {
    Term::gamma(rator, rand)
}

fn ident(name: &str) -> Term {
    Term::ident(name)
}

/// `rec fact n = n eq 0 -> 1 | n * fact (n - 1)` applied to `n`.
fn factorial(n: i64) -> Term {
    let body = Term::lambda(
        "n",
        Term::cond(
            Term::binary(BinaryOp::Eq, ident("n"), Term::int(0)),
            Term::int(1),
            Term::binary(
                BinaryOp::Mul,
                ident("n"),
                apply(
                    ident("fact"),
                    Term::binary(BinaryOp::Sub, ident("n"), Term::int(1)),
                ),
            ),
        ),
    );
    apply(
        Term::lambda("fact", apply(ident("fact"), Term::int(n))),
        apply(Term::ystar(), Term::lambda("fact", body)),
    )
}

/// `rec count n = n eq 0 -> 'done' | count (n - 1)` applied to `n`.
fn countdown(n: i64) -> Term {
    let body = Term::lambda(
        "n",
        Term::cond(
            Term::binary(BinaryOp::Eq, ident("n"), Term::int(0)),
            Term::string("done"),
            apply(
                ident("count"),
                Term::binary(BinaryOp::Sub, ident("n"), Term::int(1)),
            ),
        ),
    );
    apply(
        Term::lambda("count", apply(ident("count"), Term::int(n))),
        apply(Term::ystar(), Term::lambda("count", body)),
    )
}

// Rule 1

#[test]
fn unbound_builtin_name_denotes_the_builtin() {
    assert_eq!(eval(ident("Stem")), Value::Builtin(Builtin::Stem));
    assert_eq!(eval(apply(ident("Isinteger"), Term::int(3))), Value::Bool(true));
}

#[test]
fn binding_shadows_builtin() {
    let term = apply(Term::lambda("Stem", ident("Stem")), Term::int(9));
    assert_eq!(eval(term), Value::int(9));
}

#[test]
fn undeclared_identifier_carries_line() {
    let err = eval_err(Term::binary(BinaryOp::Add, Term::int(1), ident("y").at(4)));
    assert_eq!(
        err.kind,
        EvalErrorKind::UndeclaredIdentifier {
            name: "y".to_string()
        }
    );
    assert_eq!(err.line, Some(4));
}

// Rules 2, 3, 4

#[test]
fn lambda_application_binds_parameter() {
    let term = apply(
        Term::lambda("x", Term::binary(BinaryOp::Add, ident("x"), Term::int(1))),
        Term::int(41),
    );
    assert_eq!(eval(term), Value::int(42));
}

#[test]
fn inner_binding_shadows_outer() {
    let inner = apply(Term::lambda("x", ident("x")), Term::int(2));
    let term = apply(Term::lambda("x", inner), Term::int(1));
    assert_eq!(eval(term), Value::int(2));
}

#[test]
fn closures_capture_their_environment() {
    // ((lambda x. lambda y. x) 1) 2
    let term = apply(
        apply(
            Term::lambda("x", Term::lambda("y", ident("x"))),
            Term::int(1),
        ),
        Term::int(2),
    );
    assert_eq!(eval(term), Value::int(1));
}

#[test]
fn lambda_evaluates_to_closure() {
    let value = eval(Term::lambda("x", ident("x")));
    assert_eq!(value.to_string(), "[lambda closure: 1]");
}

// Rules 8 and 9

#[test]
fn tuple_former_keeps_source_order() {
    let value = eval(Term::tau(vec![Term::int(1), Term::string("two"), Term::int(3)]));
    assert_eq!(value.to_string(), "(1, two, 3)");
}

#[test]
fn conditional_picks_an_arm() {
    let pick = |cond| Term::cond(Term::truth(cond), Term::string("yes"), Term::string("no"));
    assert_eq!(eval(pick(true)), Value::string("yes"));
    assert_eq!(eval(pick(false)), Value::string("no"));
}

#[test]
fn conditional_requires_truthvalue() {
    let err = eval_err(Term::cond(Term::int(1), Term::int(2), Term::int(3)));
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeError {
            expected: "a truthvalue".to_string(),
            got: "1".to_string(),
        }
    );
}

// Rules 10 and 11

#[test]
fn tuple_selection() {
    let tuple = || Term::tau(vec![Term::int(10), Term::int(20), Term::int(30)]);
    assert_eq!(eval(apply(tuple(), Term::int(2))), Value::int(20));
    assert_eq!(
        eval_err(apply(tuple(), Term::int(4))).kind,
        EvalErrorKind::IndexOutOfBounds { index: 4, order: 3 }
    );
    assert!(matches!(
        eval_err(apply(tuple(), Term::string("1"))).kind,
        EvalErrorKind::TypeError { .. }
    ));
}

#[test]
fn positional_binding() {
    let minus = Term::lambda_tuple(
        ["a", "b"],
        Term::binary(BinaryOp::Sub, ident("a"), ident("b")),
    );
    let term = apply(minus, Term::tau(vec![Term::int(10), Term::int(3)]));
    assert_eq!(eval(term), Value::int(7));
}

#[test]
fn positional_binding_checks_arity() {
    let pair = || Term::lambda_tuple(["a", "b"], ident("a"));
    let err = eval_err(apply(
        pair(),
        Term::tau(vec![Term::int(1), Term::int(2), Term::int(3)]),
    ));
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 3
        }
    );
    let err = eval_err(apply(pair(), Term::int(1)));
    assert!(matches!(err.kind, EvalErrorKind::TypeError { .. }));
}

// Rules 12 and 13

#[test]
fn factorial_through_fixed_point() {
    assert_eq!(eval(factorial(5)), Value::int(120));
    assert_eq!(eval(factorial(0)), Value::int(1));
}

#[test]
fn fixed_point_yields_eta_closure() {
    let value = eval(apply(Term::ystar(), Term::lambda("f", ident("f"))));
    assert_eq!(value.to_string(), "[eta closure: 1]");
}

#[test]
fn fixed_point_requires_a_closure() {
    let err = eval_err(apply(Term::ystar(), Term::int(1)));
    assert!(matches!(err.kind, EvalErrorKind::TypeError { .. }));
}

#[test]
fn tail_recursion_runs_in_bounded_depth() {
    let outcome = run_with(countdown(100_000), Some(4)).unwrap();
    assert_eq!(outcome.value, Some(Value::string("done")));
}

#[test]
fn depth_limit_stops_deep_recursion() {
    let err = run_with(factorial(50), Some(16)).err().unwrap();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 16 });
}

// Operators and built-ins

#[test]
fn unknown_operator() {
    let err = eval_err(apply(Term::int(3), Term::int(4)));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownOperator {
            operator: "3".to_string()
        }
    );
    assert_eq!(err.notes, vec!["integer values cannot be applied".to_string()]);
}

#[test]
fn conc_consumes_both_applications() {
    let term = apply(apply(ident("Conc"), Term::string("ab")), Term::string("cd"));
    assert_eq!(eval(term), Value::string("abcd"));
    let term = apply(apply(ident("conc"), Term::string("")), Term::string("x"));
    assert_eq!(eval(term), Value::string("x"));
}

#[test]
fn partially_applied_conc_is_missing_an_operand() {
    let term = apply(
        Term::lambda("x", apply(ident("Conc"), ident("x"))),
        Term::string("a"),
    );
    assert_eq!(
        eval_err(term).kind,
        EvalErrorKind::MissingOperand {
            operator: "Conc".to_string()
        }
    );
}

#[test]
fn print_records_last_output() {
    let term = Term::tau(vec![
        apply(ident("Print"), Term::int(1)),
        apply(ident("print"), Term::string("two")),
    ]);
    let outcome = run_with(term, None).unwrap();
    // Elements are evaluated right to left.
    assert_eq!(outcome.output.as_deref(), Some("1"));
    assert_eq!(
        outcome.value.unwrap().to_string(),
        "(dummy, dummy)"
    );
}

#[test]
fn print_forwards_to_handler() {
    let interner = StringInterner::new();
    let term = apply(ident("Print"), Term::string(r"a\tb"));
    let program = rpal_canon::lower(&Tree::standardized(term), &interner).unwrap();
    let handler = PrintHandlerImpl::Buffer(crate::print_handler::BufferPrintHandler::new());
    let outcome = Machine::new(&interner, &handler, None)
        .run(program.root())
        .unwrap();
    assert_eq!(handler.get_output(), "a\tb");
    assert_eq!(outcome.output.as_deref(), Some("a\tb"));
}

#[test]
fn no_print_means_no_output() {
    let outcome = run_with(Term::int(1), None).unwrap();
    assert_eq!(outcome.output, None);
}

// Malformed control

#[test]
fn underflow_is_malformed_program() {
    let interner = StringInterner::new();
    let root = ControlUnit::shared(0, Params::new(), vec![Token::new(TokenKind::Apply, 3)]);
    let handler = PrintHandlerImpl::Silent;
    let err = Machine::new(&interner, &handler, None)
        .run(&root)
        .err()
        .unwrap();
    assert!(matches!(err.kind, EvalErrorKind::MalformedProgram { .. }));
    assert_eq!(err.line, Some(3));
}

#[test]
fn short_tuple_former_is_malformed_program() {
    let interner = StringInterner::new();
    let root = ControlUnit::shared(
        0,
        Params::new(),
        vec![
            Token::new(TokenKind::Tuple(3), 1),
            Token::new(TokenKind::Literal(Literal::Int(1)), 1),
        ],
    );
    let handler = PrintHandlerImpl::Silent;
    let err = Machine::new(&interner, &handler, None)
        .run(&root)
        .err()
        .unwrap();
    assert!(matches!(err.kind, EvalErrorKind::MalformedProgram { .. }));
}
