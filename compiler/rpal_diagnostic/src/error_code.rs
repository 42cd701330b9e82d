use std::fmt;

/// Error codes for all machine diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E3xxx: lowering errors
/// - E6xxx: runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lowering Errors (E3xxx)
    /// Lambda with no bound variables
    E3001,
    /// Same name bound twice by one lambda
    E3002,

    // Arithmetic (E600x)
    /// Division by zero
    E6001,
    /// Integer overflow
    E6002,

    // Operand kinds (E601x)
    /// Operand of the wrong kind
    E6010,
    /// Equality on dissimilar kinds
    E6011,
    /// Equality on kinds that cannot be compared
    E6012,
    /// Logical operator on non-boolean operands
    E6013,
    /// Augmentation of a non-tuple
    E6014,

    // Names and selection (E602x)
    /// Undeclared identifier
    E6020,
    /// Tuple selection out of bounds
    E6021,

    // Application (E603x)
    /// Tuple operand of the wrong order for a closure
    E6030,
    /// Activation depth limit exceeded
    E6031,
    /// Applied value is not an operator
    E6032,
    /// Operator missing its second operand
    E6033,

    // Machine (E609x)
    /// Program was never standardized
    E6090,
    /// Control program not produced by a correct lowering
    E6091,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lowering
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6014 => "E6014",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6021 => "E6021",
            ErrorCode::E6030 => "E6030",
            ErrorCode::E6031 => "E6031",
            ErrorCode::E6032 => "E6032",
            ErrorCode::E6033 => "E6033",
            ErrorCode::E6090 => "E6090",
            ErrorCode::E6091 => "E6091",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
