//! Operator tags shared by the standardized tree and the control structures.

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Equality
    Eq,
    NotEq,
    // Logical
    Or,
    And,
    // Tuple augmentation
    Aug,
}

impl BinaryOp {
    /// The operator as it appears in a standardized tree.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
            BinaryOp::Lt => "ls",
            BinaryOp::LtEq => "le",
            BinaryOp::Gt => "gr",
            BinaryOp::GtEq => "ge",
            BinaryOp::Eq => "eq",
            BinaryOp::NotEq => "ne",
            BinaryOp::Or => "or",
            BinaryOp::And => "&",
            BinaryOp::Aug => "aug",
        }
    }

    /// Parse a tree-node label. Accepts the symbolic relational spellings
    /// (`<`, `<=`, `>`, `>=`) alongside the keyword ones.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "**" => BinaryOp::Pow,
            "ls" | "<" => BinaryOp::Lt,
            "le" | "<=" => BinaryOp::LtEq,
            "gr" | ">" => BinaryOp::Gt,
            "ge" | ">=" => BinaryOp::GtEq,
            "eq" => BinaryOp::Eq,
            "ne" => BinaryOp::NotEq,
            "or" => BinaryOp::Or,
            "&" => BinaryOp::And,
            "aug" => BinaryOp::Aug,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "neg",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "not" => Some(UnaryOp::Not),
            "neg" => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
