#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// A divisor after the first operand was exactly zero.
    DivisionByZero {
        /// Position of the zero divisor in the operand list.
        index: usize,
    },
    /// An argument was outside the domain of the function.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { index } => {
                write!(f, "Division by zero (operand {index}).")
            },
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
