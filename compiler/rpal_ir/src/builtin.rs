//! Names of the primitive functions recognized by the CSE machine.

use std::fmt;

/// A primitive function.
///
/// An identifier that is not bound in any enclosing environment but matches
/// one of these names denotes the primitive itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    IsInteger,
    IsString,
    IsTuple,
    IsDummy,
    IsTruthValue,
    IsFunction,
    Stem,
    Stern,
    Conc,
    Print,
    ItoS,
    Order,
    Null,
    Neg,
}

impl Builtin {
    /// Every primitive, in declaration order.
    pub const ALL: [Builtin; 14] = [
        Builtin::IsInteger,
        Builtin::IsString,
        Builtin::IsTuple,
        Builtin::IsDummy,
        Builtin::IsTruthValue,
        Builtin::IsFunction,
        Builtin::Stem,
        Builtin::Stern,
        Builtin::Conc,
        Builtin::Print,
        Builtin::ItoS,
        Builtin::Order,
        Builtin::Null,
        Builtin::Neg,
    ];

    /// Resolve an identifier to a primitive.
    ///
    /// `conc` and `print` are accepted as lower-case spellings of `Conc` and
    /// `Print`.
    pub fn from_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "Isinteger" => Builtin::IsInteger,
            "Isstring" => Builtin::IsString,
            "Istuple" => Builtin::IsTuple,
            "Isdummy" => Builtin::IsDummy,
            "Istruthvalue" => Builtin::IsTruthValue,
            "Isfunction" => Builtin::IsFunction,
            "Stem" => Builtin::Stem,
            "Stern" => Builtin::Stern,
            "Conc" | "conc" => Builtin::Conc,
            "Print" | "print" => Builtin::Print,
            "ItoS" => Builtin::ItoS,
            "Order" => Builtin::Order,
            "Null" => Builtin::Null,
            "neg" => Builtin::Neg,
            _ => return None,
        };
        Some(builtin)
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        self.names()[0]
    }

    /// All accepted spellings, canonical first.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Builtin::IsInteger => &["Isinteger"],
            Builtin::IsString => &["Isstring"],
            Builtin::IsTuple => &["Istuple"],
            Builtin::IsDummy => &["Isdummy"],
            Builtin::IsTruthValue => &["Istruthvalue"],
            Builtin::IsFunction => &["Isfunction"],
            Builtin::Stem => &["Stem"],
            Builtin::Stern => &["Stern"],
            Builtin::Conc => &["Conc", "conc"],
            Builtin::Print => &["Print", "print"],
            Builtin::ItoS => &["ItoS"],
            Builtin::Order => &["Order"],
            Builtin::Null => &["Null"],
            Builtin::Neg => &["neg"],
        }
    }

    /// Number of operands consumed.
    ///
    /// `Conc` is curried at the surface but consumes both operands, and the
    /// second apply marker, at the first application.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Conc => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
