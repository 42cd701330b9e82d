use super::*;

#[test]
fn binary_symbols_round_trip() {
    for op in [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::Aug,
    ] {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
}

#[test]
fn relational_aliases() {
    assert_eq!(BinaryOp::from_symbol("<"), Some(BinaryOp::Lt));
    assert_eq!(BinaryOp::from_symbol(">="), Some(BinaryOp::GtEq));
    assert_eq!(BinaryOp::from_symbol("=="), None);
}

#[test]
fn builtin_lookup_accepts_aliases() {
    assert_eq!(Builtin::from_name("Conc"), Some(Builtin::Conc));
    assert_eq!(Builtin::from_name("conc"), Some(Builtin::Conc));
    assert_eq!(Builtin::from_name("print"), Some(Builtin::Print));
    assert_eq!(Builtin::from_name("neg"), Some(Builtin::Neg));
    assert_eq!(Builtin::from_name("Neg"), None);
    assert_eq!(Builtin::from_name("isinteger"), None);
}

#[test]
fn every_builtin_resolves_by_each_name() {
    for builtin in Builtin::ALL {
        for name in builtin.names() {
            assert_eq!(Builtin::from_name(name), Some(builtin));
        }
        assert_eq!(builtin.to_string(), builtin.name());
    }
}

#[test]
fn only_conc_is_binary() {
    for builtin in Builtin::ALL {
        let expected = if builtin == Builtin::Conc { 2 } else { 1 };
        assert_eq!(builtin.arity(), expected, "{builtin}");
    }
}

#[test]
fn term_helpers_set_lines() {
    let t = Term::gamma(Term::ident("Print").at(3), Term::int(1)).at(3);
    assert_eq!(t.line, 3);
    let TermKind::Gamma { rator, rand } = &t.kind else {
        panic!("expected gamma");
    };
    assert_eq!(rator.line, 3);
    assert_eq!(rand.line, 1);
}

#[test]
fn tree_flags() {
    assert!(Tree::standardized(Term::nil()).standardized);
    assert!(!Tree::unstandardized(Term::nil()).standardized);
}
