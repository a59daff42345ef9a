use std::num::ParseFloatError;

use crate::ast::Side;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing operand text.
pub enum ParseError {
    /// The operand was empty or only whitespace.
    EmptyOperand {
        /// Which operand was empty.
        side: Side,
    },
    /// The operand text is not a valid floating-point number.
    InvalidNumber {
        /// Which operand failed to parse.
        side:    Side,
        /// The trimmed operand text.
        operand: String,
        /// The error reported by the float parser.
        reason:  ParseFloatError,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOperand { side } => write!(f, "The {side} operand is missing."),
            Self::InvalidNumber { side,
                                  operand,
                                  reason, } => {
                write!(f, "The {side} operand '{operand}' is not a number: {reason}.")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyOperand { .. } => None,
            Self::InvalidNumber { reason, .. } => Some(reason),
        }
    }
}
