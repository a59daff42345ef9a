use crate::{ast::Expression, error::RuntimeError};

/// Result type used by the arithmetic primitives and the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the value of a parsed expression.
///
/// The operands are handed to the primitive for the expression's operator,
/// left operand first.
///
/// # Parameters
/// - `expression`: The parsed expression.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use calculator::{
///     ast::{Expression, Operator},
///     interpreter::evaluator::eval_expression,
/// };
///
/// let expr = Expression { left:     10.0,
///                         operator: Operator::Div,
///                         right:    2.0, };
/// assert_eq!(eval_expression(&expr).unwrap(), 5.0);
/// ```
pub fn eval_expression(expression: &Expression) -> EvalResult<f64> {
    let result = expression.operator.apply(&[expression.left, expression.right]);
    match &result {
        Ok(value) => tracing::debug!(%expression, value, "evaluated expression"),
        Err(e) => tracing::debug!(%expression, error = %e, "evaluation failed"),
    }
    result
}
