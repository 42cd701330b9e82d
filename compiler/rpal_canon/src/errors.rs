//! Lowering errors.

use std::fmt;

use rpal_diagnostic::{Diagnostic, ErrorCode};
use rpal_ir::Line;

/// Why a standardized tree could not be lowered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LowerErrorKind {
    /// A lambda that binds no names.
    EmptyParameterList,
    /// A positional lambda that binds the same name twice.
    DuplicateParameter { name: String },
}

impl fmt::Display for LowerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParameterList => write!(f, "lambda binds no variables"),
            Self::DuplicateParameter { name } => {
                write!(f, "variable `{name}` is bound twice by the same lambda")
            }
        }
    }
}

impl LowerErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyParameterList => ErrorCode::E3001,
            Self::DuplicateParameter { .. } => ErrorCode::E3002,
        }
    }
}

/// Lowering error with the line of the offending lambda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowerError {
    pub kind: LowerErrorKind,
    pub message: String,
    pub line: Line,
}

impl LowerError {
    #[cold]
    pub(crate) fn empty_parameter_list(line: Line) -> Self {
        Self::from_kind(LowerErrorKind::EmptyParameterList, line)
    }

    #[cold]
    pub(crate) fn duplicate_parameter(name: &str, line: Line) -> Self {
        Self::from_kind(
            LowerErrorKind::DuplicateParameter {
                name: name.to_string(),
            },
            line,
        )
    }

    fn from_kind(kind: LowerErrorKind, line: Line) -> Self {
        let message = kind.to_string();
        LowerError {
            kind,
            message,
            line,
        }
    }

    /// Convert into a `Diagnostic` with an E3xxx code.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.error_code())
            .with_message(&self.message)
            .with_line(self.line)
    }
}

impl fmt::Display for LowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LowerError {}
