use crate::{
    ast::{Expression, Side},
    error::{EvalError, ParseError, SyntaxError},
    interpreter::lexer::operators,
};

/// Parses a two-operand expression such as `" 10 / 2 "`.
///
/// The first operator in the text decides how it is split. Every occurrence
/// of that same operator counts as a split point, and exactly one is allowed.
/// Occurrences of other operators stay inside the operand text and make it
/// fail to parse.
///
/// # Errors
/// - `SyntaxError::MissingOperator` if the text has no operator.
/// - `SyntaxError::OperandCount` if the operator splits it into anything but
///   two operands.
/// - `ParseError` if either operand is empty or not a valid number.
///
/// # Example
/// ```
/// use calculator::{ast::Operator, interpreter::parser::parse_expression};
///
/// let expr = parse_expression("  2  *  2  ").unwrap();
/// assert_eq!(expr.operator, Operator::Mul);
/// assert_eq!((expr.left, expr.right), (2.0, 2.0));
///
/// assert!(parse_expression("1 + 1 + 1").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expression, EvalError> {
    let found = operators(source);

    let Some(first) = found.first() else {
        return Err(SyntaxError::MissingOperator { expression: source.to_string() }.into());
    };

    let splits = found.iter().filter(|t| t.operator == first.operator).count();
    if splits != 1 {
        return Err(SyntaxError::OperandCount { operator: first.operator,
                                               found:    splits + 1, }.into());
    }

    let left = parse_operand(&source[..first.span.start], Side::Left)?;
    let right = parse_operand(&source[first.span.end..], Side::Right)?;

    let expression = Expression { left,
                                  operator: first.operator,
                                  right };
    tracing::debug!(%expression, "parsed expression");
    Ok(expression)
}

/// Trims `text` and parses it as an `f64`.
///
/// # Parameters
/// - `text`: Raw operand text, surrounding whitespace included.
/// - `side`: Which side of the operator the text came from, for error
///   reporting.
///
/// # Returns
/// The parsed operand.
///
/// # Errors
/// `ParseError::EmptyOperand` for blank text, `ParseError::InvalidNumber` for
/// anything the float parser rejects.
pub fn parse_operand(text: &str, side: Side) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyOperand { side });
    }

    trimmed.parse::<f64>()
           .map_err(|reason| ParseError::InvalidNumber { side,
                                                         operand: trimmed.to_string(),
                                                         reason })
}
