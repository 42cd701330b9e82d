//! Standardized tree: the input the lowering pass consumes.
//!
//! A standardizer reduces RPAL's surface syntax (`let`, `where`, `within`,
//! function forms, simultaneous and recursive definitions, `@`) to the small
//! vocabulary below. Lowering turns this tree into [`ControlUnit`]s.
//!
//! [`ControlUnit`]: crate::ControlUnit

use crate::{BinaryOp, Line, UnaryOp};

/// A node of a standardized tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    pub line: Line,
}

/// Node kinds that survive standardization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermKind {
    Identifier(String),
    Integer(i64),
    Str(String),
    True,
    False,
    Nil,
    Dummy,
    /// The fixed-point combinator `Y*`.
    YStar,
    /// `lambda x . body` or `lambda (x, y, ...) . body`.
    Lambda { params: Vec<String>, body: Box<Term> },
    /// Application of `rator` to `rand`.
    Gamma { rator: Box<Term>, rand: Box<Term> },
    /// `cond -> then | otherwise`.
    Conditional {
        cond: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
    },
    /// Tuple formation.
    Tau(Vec<Term>),
    Binary {
        op: BinaryOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    Unary { op: UnaryOp, operand: Box<Term> },
}

impl Term {
    /// A node on line 1. Use [`Term::at`] to move it.
    pub fn new(kind: TermKind) -> Self {
        Term { kind, line: 1 }
    }

    /// Set the source line.
    #[must_use]
    pub fn at(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(TermKind::Identifier(name.into()))
    }

    pub fn int(value: i64) -> Self {
        Self::new(TermKind::Integer(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(TermKind::Str(value.into()))
    }

    pub fn truth(value: bool) -> Self {
        Self::new(if value { TermKind::True } else { TermKind::False })
    }

    pub fn nil() -> Self {
        Self::new(TermKind::Nil)
    }

    pub fn dummy() -> Self {
        Self::new(TermKind::Dummy)
    }

    pub fn ystar() -> Self {
        Self::new(TermKind::YStar)
    }

    /// Single-variable lambda.
    pub fn lambda(param: impl Into<String>, body: Term) -> Self {
        Self::new(TermKind::Lambda {
            params: vec![param.into()],
            body: Box::new(body),
        })
    }

    /// Lambda destructuring a tuple operand into `params`.
    pub fn lambda_tuple<S: Into<String>>(params: impl IntoIterator<Item = S>, body: Term) -> Self {
        Self::new(TermKind::Lambda {
            params: params.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        })
    }

    pub fn gamma(rator: Term, rand: Term) -> Self {
        Self::new(TermKind::Gamma {
            rator: Box::new(rator),
            rand: Box::new(rand),
        })
    }

    pub fn cond(cond: Term, then: Term, otherwise: Term) -> Self {
        Self::new(TermKind::Conditional {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    pub fn tau(items: Vec<Term>) -> Self {
        Self::new(TermKind::Tau(items))
    }

    pub fn binary(op: BinaryOp, left: Term, right: Term) -> Self {
        Self::new(TermKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOp, operand: Term) -> Self {
        Self::new(TermKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }
}

/// A whole tree as handed over by the standardizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub root: Term,
    /// Whether standardization ran to completion.
    pub standardized: bool,
}

impl Tree {
    /// A tree the standardizer finished with.
    pub fn standardized(root: Term) -> Self {
        Tree {
            root,
            standardized: true,
        }
    }

    /// A tree standardization never completed on.
    pub fn unstandardized(root: Term) -> Self {
        Tree {
            root,
            standardized: false,
        }
    }
}
