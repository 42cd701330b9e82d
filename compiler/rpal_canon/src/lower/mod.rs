//! Standardized tree → control units.
//!
//! Emission order per node (bodies run from the end):
//! - `Gamma(r, d)` → `gamma, r…, d…`
//! - `Binary(op, l, r)` → `op, l…, r…`
//! - `Unary(op, e)` → `op, e…`
//! - `Tau(e1..en)` → `tau<n>, e1…, …, en…`
//! - `Conditional(c, t, e)` → `beta<t… | e…>, c…`
//! - `Lambda(ps, b)` → `lambda<k>` with `b` lowered into unit `k`

use std::rc::Rc;

use rpal_ir::{
    Branches, ControlUnit, Line, Literal, Params, Program, SharedUnit, StringInterner, Term,
    TermKind, Token, TokenKind, Tree,
};
use rpal_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::LowerError;

/// Lower a standardized tree into a program.
///
/// The whole tree becomes the body of the root unit (index 0, no bound
/// variables). Nested lambdas become units numbered in pre-order. The
/// tree's standardization flag is carried into the program unchanged.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lower(tree: &Tree, interner: &StringInterner) -> Result<Program, LowerError> {
    let mut lowerer = Lowerer::new(interner);
    let mut body = Vec::new();
    lowerer.lower_term(&tree.root, &mut body)?;
    tracing::debug!(
        units = lowerer.next_index,
        standardized = tree.standardized,
        "lowered tree"
    );
    let root = ControlUnit::shared(0, Params::new(), body);
    Ok(Program::from_parts(root, tree.standardized, interner))
}

struct Lowerer<'a> {
    interner: &'a StringInterner,
    /// Index the next lambda gets; the root unit holds 0.
    next_index: u32,
}

impl<'a> Lowerer<'a> {
    fn new(interner: &'a StringInterner) -> Self {
        Lowerer {
            interner,
            next_index: 1,
        }
    }

    fn lower_term(&mut self, term: &Term, out: &mut Vec<Token>) -> Result<(), LowerError> {
        ensure_sufficient_stack(|| self.lower_term_inner(term, out))
    }

    fn lower_term_inner(&mut self, term: &Term, out: &mut Vec<Token>) -> Result<(), LowerError> {
        let line = term.line;
        let token = |kind| Token::new(kind, line);
        match &term.kind {
            TermKind::Identifier(name) => {
                out.push(token(TokenKind::Identifier(self.interner.intern(name))));
            }
            TermKind::Integer(n) => out.push(token(TokenKind::Literal(Literal::Int(*n)))),
            TermKind::Str(s) => {
                out.push(token(TokenKind::Literal(Literal::Str(Rc::from(s.as_str())))));
            }
            TermKind::True => out.push(token(TokenKind::Literal(Literal::Bool(true)))),
            TermKind::False => out.push(token(TokenKind::Literal(Literal::Bool(false)))),
            TermKind::Dummy => out.push(token(TokenKind::Literal(Literal::Dummy))),
            TermKind::Nil => out.push(token(TokenKind::Tuple(0))),
            TermKind::YStar => out.push(token(TokenKind::FixedPoint)),
            TermKind::Lambda { params, body } => {
                let unit = self.lower_lambda(params, body, line)?;
                out.push(token(TokenKind::Lambda(unit)));
            }
            TermKind::Gamma { rator, rand } => {
                out.push(token(TokenKind::Apply));
                self.lower_term(rator, out)?;
                self.lower_term(rand, out)?;
            }
            TermKind::Conditional {
                cond,
                then,
                otherwise,
            } => {
                // Lowered in tree order so lambda numbering stays pre-order.
                let mut cond_tokens = Vec::new();
                self.lower_term(cond, &mut cond_tokens)?;
                let mut then_tokens = Vec::new();
                self.lower_term(then, &mut then_tokens)?;
                let mut else_tokens = Vec::new();
                self.lower_term(otherwise, &mut else_tokens)?;
                out.push(token(TokenKind::Conditional(Rc::new(Branches {
                    then: then_tokens,
                    otherwise: else_tokens,
                }))));
                out.append(&mut cond_tokens);
            }
            TermKind::Tau(items) => {
                out.push(token(TokenKind::Tuple(items.len())));
                for item in items {
                    self.lower_term(item, out)?;
                }
            }
            TermKind::Binary { op, left, right } => {
                out.push(token(TokenKind::Binary(*op)));
                self.lower_term(left, out)?;
                self.lower_term(right, out)?;
            }
            TermKind::Unary { op, operand } => {
                out.push(token(TokenKind::Unary(*op)));
                self.lower_term(operand, out)?;
            }
        }
        Ok(())
    }

    fn lower_lambda(
        &mut self,
        params: &[String],
        body: &Term,
        line: Line,
    ) -> Result<SharedUnit, LowerError> {
        if params.is_empty() {
            return Err(LowerError::empty_parameter_list(line));
        }
        let mut seen = FxHashSet::default();
        let mut names = Params::with_capacity(params.len());
        for param in params {
            let name = self.interner.intern(param);
            if !seen.insert(name) {
                return Err(LowerError::duplicate_parameter(param, line));
            }
            names.push(name);
        }

        // Pre-order: the lambda is numbered before anything inside it.
        let index = self.next_index;
        self.next_index += 1;

        let mut tokens = Vec::new();
        self.lower_term(body, &mut tokens)?;
        Ok(ControlUnit::shared(index, names, tokens))
    }
}
