//! Control structures for the CSE machine.
//!
//! A [`ControlUnit`] is the template of one lambda abstraction: its bound
//! variables and its body, a flat sequence of [`Token`]s. Units are built
//! once by lowering and shared by every closure that wraps them; only the
//! environment differs between activations.
//!
//! Bodies are stored in control-stack order: the machine pops from the end,
//! so the last token of a body is the first one executed.

use std::fmt::Write as _;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::{BinaryOp, InternerId, Name, StringInterner, UnaryOp};

/// Source line a token was lowered from.
pub type Line = u32;

/// Constant operand carried by a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Dummy,
}

/// The two arms of a conditional, each a token sequence in control-stack
/// order.
#[derive(Clone, Debug)]
pub struct Branches {
    pub then: Vec<Token>,
    pub otherwise: Vec<Token>,
}

/// What a control token does when the machine pops it.
#[derive(Clone, Debug)]
pub enum TokenKind {
    /// Rule 1: look the name up.
    Identifier(Name),
    /// Pushed unchanged.
    Literal(Literal),
    /// Rule 2: capture the current environment.
    Lambda(SharedUnit),
    Binary(BinaryOp),
    Unary(UnaryOp),
    /// Rule 9: collect this many values into a tuple.
    Tuple(usize),
    /// Rule 8: choose an arm on the popped truth value.
    Conditional(Rc<Branches>),
    /// Apply the value on top of the stack to the one below it.
    Apply,
    /// The `Y*` combinator.
    FixedPoint,
}

/// A control token and the source line it came from.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub line: Line,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: Line) -> Self {
        Token { kind, line }
    }
}

/// Bound variables of a unit. Arity 1 binds the operand directly; a larger
/// arity destructures a tuple operand positionally.
pub type Params = SmallVec<[Name; 2]>;

/// Template of a lambda abstraction.
#[derive(Debug)]
pub struct ControlUnit {
    index: u32,
    params: Params,
    body: Vec<Token>,
}

/// Units are shared by the enclosing body and by every closure over them.
pub type SharedUnit = Rc<ControlUnit>;

impl ControlUnit {
    pub fn new(index: u32, params: Params, body: Vec<Token>) -> Self {
        ControlUnit {
            index,
            params,
            body,
        }
    }

    /// Shared-ownership constructor.
    pub fn shared(index: u32, params: Params, body: Vec<Token>) -> SharedUnit {
        Rc::new(Self::new(index, params, body))
    }

    /// Pre-order number of this lambda in its program; the root is 0.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &[Token] {
        &self.body
    }

    /// Render the body in control-stack order, one word per token.
    ///
    /// Nested units appear as `lambda<index>`; conditionals show both arms.
    pub fn render(&self, interner: &StringInterner) -> String {
        render_tokens(&self.body, interner)
    }
}

/// Render a token sequence the way [`ControlUnit::render`] does.
pub fn render_tokens(tokens: &[Token], interner: &StringInterner) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        render_token(&mut out, token, interner);
    }
    out
}

fn render_token(out: &mut String, token: &Token, interner: &StringInterner) {
    // Writing to a String cannot fail.
    let _ = match &token.kind {
        TokenKind::Identifier(name) => write!(out, "{}", interner.lookup(*name)),
        TokenKind::Literal(Literal::Int(n)) => write!(out, "{n}"),
        TokenKind::Literal(Literal::Str(s)) => write!(out, "'{s}'"),
        TokenKind::Literal(Literal::Bool(b)) => write!(out, "{b}"),
        TokenKind::Literal(Literal::Dummy) => write!(out, "dummy"),
        TokenKind::Lambda(unit) => write!(out, "lambda<{}>", unit.index()),
        TokenKind::Binary(op) => write!(out, "{op}"),
        TokenKind::Unary(op) => write!(out, "{op}"),
        TokenKind::Tuple(arity) => write!(out, "tau<{arity}>"),
        TokenKind::Conditional(branches) => write!(
            out,
            "beta<{} | {}>",
            render_tokens(&branches.then, interner),
            render_tokens(&branches.otherwise, interner)
        ),
        TokenKind::Apply => write!(out, "gamma"),
        TokenKind::FixedPoint => write!(out, "Y*"),
    };
}

/// A lowered program ready for the machine.
///
/// Records the interner its names came from; they resolve correctly only
/// through that interner.
#[derive(Debug, Clone)]
pub struct Program {
    root: SharedUnit,
    standardized: bool,
    interner: InternerId,
}

impl Program {
    /// A program whose tree went through standardization.
    pub fn new(root: SharedUnit, interner: &StringInterner) -> Self {
        Program::from_parts(root, true, interner)
    }

    /// Build a program and record whether standardization completed.
    pub fn from_parts(root: SharedUnit, standardized: bool, interner: &StringInterner) -> Self {
        Program {
            root,
            standardized,
            interner: interner.id(),
        }
    }

    #[inline]
    pub fn root(&self) -> &SharedUnit {
        &self.root
    }

    /// False when the tree still contains surface syntax; the machine
    /// refuses to run such a program.
    #[inline]
    pub fn is_standardized(&self) -> bool {
        self.standardized
    }

    /// Id of the interner the program was lowered with.
    #[inline]
    pub fn interner_id(&self) -> InternerId {
        self.interner
    }
}

#[cfg(test)]
mod tests;
