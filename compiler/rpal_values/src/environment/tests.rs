#![allow(clippy::unwrap_used)]

use super::*;
use crate::EvalErrorKind;

fn name(raw: u32) -> Name {
    Name::from_raw(raw)
}

#[test]
fn root_is_empty() {
    let root = Environment::root();
    assert!(root.is_root());
    assert_eq!(root.depth(), 0);
    assert_eq!(root.lookup(name(1)), None);
}

#[test]
fn child_sees_parent_bindings() {
    let mut scope = Environment::root().extend();
    scope.bind(name(1), Value::int(10));
    let outer = scope.seal();
    let inner = outer.extend().seal();

    assert_eq!(inner.depth(), 2);
    assert!(!inner.is_root());
    assert_eq!(inner.lookup(name(1)), Some(Value::int(10)));
}

#[test]
fn nearest_binding_wins() {
    let mut scope = Environment::root().extend();
    scope.bind(name(1), Value::int(1));
    let outer = scope.seal();

    let mut scope = outer.extend();
    scope.bind(name(1), Value::int(2));
    let inner = scope.seal();

    assert_eq!(inner.lookup(name(1)), Some(Value::int(2)));
    assert_eq!(outer.lookup(name(1)), Some(Value::int(1)));
}

#[test]
fn siblings_share_a_parent() {
    let mut scope = Environment::root().extend();
    scope.bind(name(1), Value::string("shared"));
    let parent = scope.seal();

    let mut left = parent.extend();
    left.bind(name(2), Value::int(1));
    let left = left.seal();
    let right = parent.extend().seal();

    assert_eq!(left.lookup(name(1)), right.lookup(name(1)));
    assert_eq!(right.lookup(name(2)), None);
}

#[test]
fn positional_binding_is_one_based() {
    let tuple = Tuple::new(vec![Value::int(1), Value::string("two")]);
    let mut scope = Environment::root().extend();
    scope.bind_positional(&[name(1), name(2)], &tuple).unwrap();
    let env = scope.seal();

    assert_eq!(env.lookup(name(1)), Some(Value::int(1)));
    assert_eq!(env.lookup(name(2)), Some(Value::string("two")));
}

#[test]
fn positional_binding_rejects_wrong_order() {
    let tuple = Tuple::new(vec![Value::int(1), Value::int(2), Value::int(3)]);
    let mut scope = Environment::root().extend();
    let err = scope.bind_positional(&[name(1), name(2)], &tuple).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 3
        }
    );

    let short = Tuple::new(vec![Value::int(1)]);
    let err = scope.bind_positional(&[name(1), name(2)], &short).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn deep_chain_lookup_is_iterative() {
    let mut scope = Environment::root().extend();
    scope.bind(name(1), Value::Bool(true));
    let mut env = scope.seal();
    for _ in 0..10_000 {
        env = env.extend().seal();
    }
    assert_eq!(env.depth(), 10_001);
    assert_eq!(env.lookup(name(1)), Some(Value::Bool(true)));
    assert_eq!(env.lookup(name(2)), None);
}
