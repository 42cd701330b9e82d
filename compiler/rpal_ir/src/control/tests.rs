use super::*;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

fn tok(kind: TokenKind) -> Token {
    Token::new(kind, 1)
}

#[test]
fn render_apply_of_sum() {
    let interner = StringInterner::new();
    let print = interner.intern("Print");
    let unit = ControlUnit::new(
        0,
        Params::new(),
        vec![
            tok(TokenKind::Apply),
            tok(TokenKind::Identifier(print)),
            tok(TokenKind::Binary(BinaryOp::Add)),
            tok(TokenKind::Literal(Literal::Int(3))),
            tok(TokenKind::Literal(Literal::Int(4))),
        ],
    );
    assert_eq!(unit.render(&interner), "gamma Print + 3 4");
}

#[test]
fn render_nested_unit_and_conditional() {
    let interner = StringInterner::new();
    let n = interner.intern("n");
    let inner = ControlUnit::shared(1, smallvec![n], vec![tok(TokenKind::Identifier(n))]);
    let branches = Branches {
        then: vec![tok(TokenKind::Literal(Literal::Str(Rc::from("yes"))))],
        otherwise: vec![tok(TokenKind::Literal(Literal::Dummy))],
    };
    let unit = ControlUnit::new(
        0,
        Params::new(),
        vec![
            tok(TokenKind::Conditional(Rc::new(branches))),
            tok(TokenKind::Literal(Literal::Bool(true))),
            tok(TokenKind::Lambda(inner)),
            tok(TokenKind::Tuple(0)),
            tok(TokenKind::FixedPoint),
            tok(TokenKind::Unary(UnaryOp::Not)),
        ],
    );
    assert_eq!(
        unit.render(&interner),
        "beta<'yes' | dummy> true lambda<1> tau<0> Y* not"
    );
}

#[test]
fn program_records_standardization() {
    let interner = StringInterner::new();
    let root = ControlUnit::shared(0, Params::new(), Vec::new());
    assert!(Program::new(Rc::clone(&root), &interner).is_standardized());
    assert!(!Program::from_parts(root, false, &interner).is_standardized());
}

#[test]
fn program_records_its_interner() {
    let interner = StringInterner::new();
    let other = StringInterner::new();
    let program = Program::new(ControlUnit::shared(0, Params::new(), Vec::new()), &interner);
    assert_eq!(program.interner_id(), interner.id());
    assert_ne!(program.interner_id(), other.id());
}

#[test]
fn unit_accessors() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    let unit = ControlUnit::new(4, smallvec![x, y], vec![tok(TokenKind::Apply)]);
    assert_eq!(unit.index(), 4);
    assert_eq!(unit.params(), &[x, y]);
    assert_eq!(unit.body().len(), 1);
}
