//! Diagnostics for lowering and evaluation failures.
//!
//! Each failure carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - the source line where it went wrong
//! - optional notes and suggestions

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
