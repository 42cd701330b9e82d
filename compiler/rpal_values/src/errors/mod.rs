//! Error types for evaluation.
//!
//! `EvalErrorKind` provides typed error categories for diagnostic conversion.
//! Factory functions (e.g., `division_by_zero()`) are the public API: they
//! populate both `kind` and `message`. The machine attaches the source line
//! of the token that raised the error with [`EvalError::with_line`].

use std::fmt;

use rpal_ir::{BinaryOp, Line};

use crate::Value;

/// Result of evaluating one step.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
///
/// Each variant carries the data of its error condition, so callers can match
/// on the kind instead of parsing messages, and each maps to one E6xxx code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },

    // Operand kinds
    TypeError {
        expected: String,
        got: String,
    },
    DissimilarTypes {
        left: String,
        right: String,
    },
    UnsupportedComparison {
        op: BinaryOp,
        left: String,
        right: String,
    },
    UnsupportedOperands {
        op: BinaryOp,
        left: String,
        right: String,
    },
    NotATuple {
        got: String,
    },

    // Names and selection
    UndeclaredIdentifier {
        name: String,
    },
    IndexOutOfBounds {
        index: i64,
        order: usize,
    },

    // Application
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    StackOverflow {
        depth: usize,
    },
    UnknownOperator {
        operator: String,
    },
    MissingOperand {
        operator: String,
    },

    // Machine
    PrecheckError,
    MalformedProgram {
        detail: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }

            // Operand kinds
            Self::TypeError { expected, got } => {
                write!(f, "expected {expected}; was given {got}")
            }
            Self::DissimilarTypes { left, right } => {
                write!(f, "cannot compare dissimilar types: {left} and {right}")
            }
            Self::UnsupportedComparison { op, left, right } => {
                write!(f, "don't know how to `{op}` {left} and {right}")
            }
            Self::UnsupportedOperands { op, left, right } => {
                write!(
                    f,
                    "`{op}` needs two truth values; was given {left} and {right}"
                )
            }
            Self::NotATuple { got } => write!(f, "cannot augment a non-tuple: {got}"),

            // Names and selection
            Self::UndeclaredIdentifier { name } => write!(f, "undeclared identifier: {name}"),
            Self::IndexOutOfBounds { index, order } => {
                write!(
                    f,
                    "tuple selection index {index} out of bounds for a tuple of order {order}"
                )
            }

            // Application
            Self::ArityMismatch { expected, got } => {
                let word = if *expected == 1 { "element" } else { "elements" };
                write!(f, "expected a tuple of {expected} {word}, got {got}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum activation depth exceeded (limit: {depth})")
            }
            Self::UnknownOperator { operator } => {
                write!(f, "don't know how to apply {operator}")
            }
            Self::MissingOperand { operator } => {
                write!(f, "{operator} is missing its second operand")
            }

            // Machine
            Self::PrecheckError => write!(f, "program was not standardized"),
            Self::MalformedProgram { detail } => {
                write!(f, "malformed control program: {detail}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category for diagnostic conversion.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
    /// Source line of the token that raised the error.
    pub line: Option<Line>,
    /// Additional context notes.
    pub notes: Vec<String>,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            line: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source line to this error.
    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Arithmetic Errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Operand Errors

/// Operand of the wrong kind. `got` is the text of the offending operand(s).
#[cold]
pub fn type_error(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Equality across kinds that never compare.
#[cold]
pub fn dissimilar_types(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DissimilarTypes {
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Equality on a kind with no equality (tuples, functions).
#[cold]
pub fn unsupported_comparison(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedComparison {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Logical operator applied to non-boolean operands.
#[cold]
pub fn unsupported_operands(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperands {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// `aug` on something that is not a tuple.
#[cold]
pub fn not_a_tuple(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotATuple {
        got: got.to_string(),
    })
}

// Name and Selection Errors

/// Identifier bound nowhere in the chain and not a built-in.
#[cold]
pub fn undeclared_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndeclaredIdentifier {
        name: name.to_string(),
    })
}

/// Tuple selection outside `1..=order`.
#[cold]
pub fn index_out_of_bounds(index: i64, order: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, order })
}

// Application Errors

/// Positional binding of a tuple of the wrong order.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// Activation depth limit exceeded.
#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

/// Applied value is not a closure, tuple, built-in or `Y*`.
#[cold]
pub fn unknown_operator(operator: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        operator: operator.to_string(),
    })
}

/// Binary built-in applied to a single operand.
#[cold]
pub fn missing_operand(operator: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingOperand {
        operator: operator.to_string(),
    })
}

// Machine Errors

/// Program handed over before standardization completed.
#[cold]
pub fn precheck_error() -> EvalError {
    EvalError::from_kind(EvalErrorKind::PrecheckError)
}

/// Control program that no correct lowering produces.
#[cold]
pub fn malformed_program(detail: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedProgram {
        detail: detail.to_string(),
    })
}

mod diagnostics;
