//! Errors raised while building a truth table.
//!
//! Every variant aborts the whole table: no row is produced for an expression
//! that fails anywhere.

use crate::symbols::Operator;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character that is not a variable, a bit, an operator or a parenthesis.
    /// `position` is the character index in the expression.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("malformed postfix expression: {reason}")]
    MalformedPostfix { reason: MalformedReason },

    #[error("empty expression")]
    EmptyExpression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The operator found fewer operands on the stack than it needs.
    MissingOperand(Operator),
    /// Evaluation finished without any value.
    NoResult,
    /// Evaluation finished with more than one value left.
    ResidualValues(usize),
    /// A postfix character that is neither a bit nor an operator.
    UnknownToken(char),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand(op) => write!(f, "missing operand for '{op}'"),
            Self::NoResult => write!(f, "no value left on the stack"),
            Self::ResidualValues(n) => write!(f, "{n} values left on the stack"),
            Self::UnknownToken(c) => write!(f, "unknown token {c:?}"),
        }
    }
}

impl Error {
    pub(crate) const fn malformed(reason: MalformedReason) -> Self {
        Self::MalformedPostfix { reason }
    }
}
