//! Runtime error to diagnostic conversion.
//!
//! # Error Code Ranges (E6xxx)
//!
//! - E6001–E6009: Arithmetic (division by zero, overflow)
//! - E6010–E6019: Operand kinds (type errors, comparisons, augmentation)
//! - E6020–E6029: Names and tuple selection
//! - E6030–E6039: Application (arity, depth limit, operators)
//! - E6090–E6099: Machine (precheck, malformed control)

use rpal_diagnostic::{Diagnostic, ErrorCode};

use super::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    /// Map this error kind to its corresponding `ErrorCode`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            // Arithmetic
            Self::DivisionByZero => ErrorCode::E6001,
            Self::IntegerOverflow { .. } => ErrorCode::E6002,

            // Operand kinds
            Self::TypeError { .. } => ErrorCode::E6010,
            Self::DissimilarTypes { .. } => ErrorCode::E6011,
            Self::UnsupportedComparison { .. } => ErrorCode::E6012,
            Self::UnsupportedOperands { .. } => ErrorCode::E6013,
            Self::NotATuple { .. } => ErrorCode::E6014,

            // Names and selection
            Self::UndeclaredIdentifier { .. } => ErrorCode::E6020,
            Self::IndexOutOfBounds { .. } => ErrorCode::E6021,

            // Application
            Self::ArityMismatch { .. } => ErrorCode::E6030,
            Self::StackOverflow { .. } => ErrorCode::E6031,
            Self::UnknownOperator { .. } => ErrorCode::E6032,
            Self::MissingOperand { .. } => ErrorCode::E6033,

            // Machine
            Self::PrecheckError => ErrorCode::E6090,
            Self::MalformedProgram { .. } => ErrorCode::E6091,
        }
    }

    /// Produce an actionable suggestion for fixable errors.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::DivisionByZero => Some("test the divisor with `eq 0` first".to_string()),
            Self::IndexOutOfBounds { order, .. } if *order > 0 => {
                Some(format!("select with an index between 1 and {order}"))
            }
            Self::IndexOutOfBounds { .. } => {
                Some("the tuple is empty; check it with `Null` first".to_string())
            }
            Self::MissingOperand { operator } => {
                Some(format!("apply {operator} to both of its operands"))
            }
            Self::PrecheckError => Some("standardize the tree before lowering it".to_string()),
            _ => None,
        }
    }
}

impl EvalError {
    /// Convert this `EvalError` into a `Diagnostic`.
    ///
    /// Maps `EvalErrorKind` to an E6xxx error code and carries the message,
    /// line, notes and any suggestion over.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code()).with_message(&self.message);

        if let Some(line) = self.line {
            diag = diag.with_line(line);
        }

        for note in &self.notes {
            diag = diag.with_note(note);
        }

        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }

        diag
    }
}
