//! RPAL IR - shared types for the CSE machine workspace.
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`tree`]: the standardized tree handed over by a standardizer
//! - [`control`]: control units and tokens the machine executes
//! - [`BinaryOp`] / [`UnaryOp`] / [`Builtin`]: operator and primitive tags

mod builtin;
pub mod control;
mod interner;
mod name;
mod ops;
pub mod tree;

pub use builtin::Builtin;
pub use control::{
    render_tokens, Branches, ControlUnit, Line, Literal, Params, Program, SharedUnit, Token,
    TokenKind,
};
pub use interner::{InternError, InternerId, SharedInterner, StringInterner};
pub use name::Name;
pub use ops::{BinaryOp, UnaryOp};
pub use tree::{Term, TermKind, Tree};

#[cfg(test)]
mod tests;
