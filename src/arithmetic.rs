use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Returns the sum of all `values`.
///
/// An empty slice sums to `0.0`.
///
/// # Parameters
/// - `values`: The addends.
///
/// # Returns
/// The sum as an `f64`.
///
/// # Example
/// ```
/// use calculator::add;
///
/// assert_eq!(add(&[1.0, 2.0, 3.5]), 6.5);
/// assert_eq!(add(&[]), 0.0);
/// ```
#[must_use]
pub fn add(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Subtracts every following value from the first one.
///
/// An empty slice yields `0.0` and a single value is returned unchanged.
///
/// # Example
/// ```
/// use calculator::subtract;
///
/// assert_eq!(subtract(&[5.0, 1.0, 1.0]), 3.0);
/// assert_eq!(subtract(&[100.0]), 100.0);
/// ```
#[must_use]
pub fn subtract(values: &[f64]) -> f64 {
    match values.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, v| acc - v),
        None => 0.0,
    }
}

/// Multiplies all `values` together, left to right.
///
/// An empty slice yields `0.0`, not the multiplicative identity. Callers that
/// need `1.0` for an empty product must handle that case themselves.
///
/// # Example
/// ```
/// use calculator::multiply;
///
/// assert_eq!(multiply(&[2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(multiply(&[]), 0.0);
/// ```
#[must_use]
pub fn multiply(values: &[f64]) -> f64 {
    match values.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, v| acc * v),
        None => 0.0,
    }
}

/// Divides the first value by every following value in turn.
///
/// An empty slice yields `0.0` and a single value is returned unchanged. The
/// first value may be zero; any later value that is exactly zero (either
/// sign) is a `DivisionByZero` error naming its index.
///
/// # Parameters
/// - `values`: Dividend followed by the divisors, in order.
///
/// # Returns
/// An `EvalResult<f64>` containing the quotient.
///
/// # Example
/// ```
/// use calculator::{divide, error::RuntimeError};
///
/// assert_eq!(divide(&[-4.0, 2.0, 1.0]).unwrap(), -2.0);
/// assert_eq!(divide(&[4.0, 0.0, 1.0]),
///            Err(RuntimeError::DivisionByZero { index: 1 }));
/// ```
pub fn divide(values: &[f64]) -> EvalResult<f64> {
    let Some((first, rest)) = values.split_first() else {
        return Ok(0.0);
    };

    rest.iter().enumerate().try_fold(*first, |acc, (i, &divisor)| {
                               if divisor == 0.0 {
                                   return Err(RuntimeError::DivisionByZero { index: i + 1 });
                               }
                               Ok(acc / divisor)
                           })
}

/// Computes the non-negative square root of `x`.
///
/// Negative inputs and NaN produce an `InvalidArgument` error. Both zeros
/// return `+0.0`.
///
/// # Parameters
/// - `x`: The radicand.
///
/// # Returns
/// An `EvalResult<f64>` containing the non-negative root.
///
/// # Example
/// ```
/// use calculator::sqrt;
///
/// assert_eq!(sqrt(4.0).unwrap(), 2.0);
/// assert_eq!(sqrt(0.25).unwrap(), 0.5);
/// assert!(sqrt(-4.0).is_err());
/// ```
pub fn sqrt(x: f64) -> EvalResult<f64> {
    if x.is_nan() {
        return Err(RuntimeError::InvalidArgument { details: "cannot take the square root of NaN".to_string() });
    }
    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot take the square root of negative number {x}") });
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    Ok(x.sqrt())
}
