//! Runtime data of the RPAL CSE machine.
//!
//! - [`Value`] and [`Tuple`]: what lives on the value stack
//! - [`Environment`] / [`Scope`]: parent-linked, reference-counted scopes
//! - [`EvalError`]: structured runtime errors with E6xxx diagnostics
//!
//! Everything here is single-threaded (`Rc`, `RefCell`).

pub mod environment;
mod errors;
mod value;

pub use environment::{Environment, Scope};
pub use errors::{
    arity_mismatch, dissimilar_types, division_by_zero, index_out_of_bounds, integer_overflow,
    malformed_program, missing_operand, not_a_tuple, precheck_error, stack_overflow, type_error,
    undeclared_identifier, unknown_operator, unsupported_comparison, unsupported_operands,
    EvalError, EvalErrorKind, EvalResult,
};
pub use value::{Closure, Tuple, Value};
