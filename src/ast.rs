use crate::{arithmetic, error::SyntaxError, interpreter::evaluator::EvalResult};

/// Represents a binary arithmetic operator.
///
/// The set is closed: an expression can only ever be split on one of these
/// four characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// All operators, in the order they are listed in error messages.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Folds `values` with the arithmetic primitive matching this operator.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(&[10.0, 4.0, 1.0]).unwrap(), 5.0);
    /// assert!(Operator::Div.apply(&[1.0, 0.0]).is_err());
    /// ```
    pub fn apply(self, values: &[f64]) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(arithmetic::add(values)),
            Self::Sub => Ok(arithmetic::subtract(values)),
            Self::Mul => Ok(arithmetic::multiply(values)),
            Self::Div => arithmetic::divide(values),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = SyntaxError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or(SyntaxError::UnknownOperator { symbol })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which side of the operator an operand sits on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Text before the operator.
    Left,
    /// Text after the operator.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A parsed two-operand expression such as `10 / 2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Expression {
    /// Operand before the operator.
    pub left:     f64,
    /// The operator joining the operands.
    pub operator: Operator,
    /// Operand after the operator.
    pub right:    f64,
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_round_trip_through_char() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.symbol()).unwrap(), op);
        }
        assert_eq!(Operator::try_from('%'),
                   Err(SyntaxError::UnknownOperator { symbol: '%' }));
    }

    #[test]
    fn expression_displays_in_infix_form() {
        let expr = Expression { left:     1.5,
                                operator: Operator::Mul,
                                right:    2.0, };
        assert_eq!(expr.to_string(), "1.5 * 2");
    }
}
