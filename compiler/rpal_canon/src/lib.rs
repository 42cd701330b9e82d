//! Control-structure lowering for the RPAL CSE machine.
//!
//! This crate turns a standardized tree into the control units the machine
//! executes (the "delta" structures of the CSE model).
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lex → Parse → Standardize → **Lower** → rpal_eval
//! ```
//!
//! Everything before lowering lives outside this workspace; a standardizer
//! hands over an [`rpal_ir::Tree`].
//!
//! # What Happens During Lowering
//!
//! 1. Every lambda becomes a [`rpal_ir::ControlUnit`], numbered in pre-order
//!    with the root unit as 0.
//! 2. Each body is flattened into tokens in control-stack order: the last
//!    token is executed first.
//! 3. Bound-variable lists are checked: a lambda binds at least one name and
//!    never the same name twice.

mod errors;
mod lower;

pub use errors::{LowerError, LowerErrorKind};
pub use lower::lower;
