/// Syntax errors.
///
/// Raised while locating the operator in an expression, before any operand
/// text is looked at. Covers a missing operator and the wrong number of
/// operands around it.
pub mod syntax_error;
/// Operand parse errors.
///
/// Raised when the text on either side of the operator is not a valid
/// floating-point number.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors the arithmetic primitives can return: division by
/// zero and arguments outside a function's domain.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure produced while evaluating an expression string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression had no operator or the wrong number of operands.
    Syntax(SyntaxError),
    /// An operand was not a valid number.
    Parse(ParseError),
    /// The arithmetic itself failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

/// An evaluation failure on a specific line of a multi-line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// The 1-based source line where the error occurred.
    pub line:  usize,
    /// The underlying failure.
    pub error: EvalError,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
