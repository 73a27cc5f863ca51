use std::fmt;

/// A single-letter variable in an expression.
///
/// Variables are case sensitive and ordered by character code, so `A < Z < a < z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub char);

impl Variable {
    pub const fn name(self) -> char {
        self.0
    }

    pub fn is_variable(c: char) -> bool {
        c.is_alphabetic()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Variable> for char {
    fn from(v: Variable) -> Self {
        v.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Xor,
    Or,
}

impl Operator {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::Not, Self::And, Self::Xor, Self::Or]
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::variants().iter().find(|op| op.symbol() == c).copied()
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Not => '!',
            Self::And => '&',
            Self::Xor => '^',
            Self::Or => '|',
        }
    }

    /// Binding strength used by the infix-to-postfix conversion.
    /// An open parenthesis on the operator stack counts as 0.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 4,
            Self::And => 3,
            Self::Xor => 2,
            Self::Or => 1,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.symbol(), f)
    }
}

pub const fn bit_char(b: bool) -> char {
    if b {
        '1'
    } else {
        '0'
    }
}
