use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while locating the operator.
pub enum SyntaxError {
    /// None of `+`, `-`, `*` or `/` appears in the expression.
    MissingOperator {
        /// The expression as given.
        expression: String,
    },
    /// A character that is not one of `+`, `-`, `*` or `/` was read as an
    /// operator.
    UnknownOperator {
        /// The offending character.
        symbol: char,
    },
    /// Splitting on the operator did not yield exactly two operands.
    OperandCount {
        /// The operator the expression was split on.
        operator: Operator,
        /// The number of operands found.
        found:    usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperator { expression } => write!(f,
                                                           "No operator found in '{expression}'. Expected one of +, -, * or /."),
            Self::UnknownOperator { symbol } => {
                write!(f, "'{symbol}' is not an operator. Expected one of +, -, * or /.")
            },
            Self::OperandCount { operator, found } => write!(f,
                                                             "Expected 2 operands around '{operator}', but found {found}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
