/// Default relative tolerance used for approximate comparisons.
pub const REL_TOLERANCE: f64 = 1e-10;
/// Default absolute tolerance used for approximate comparisons.
pub const ABS_TOLERANCE: f64 = 0.0;

/// Checks whether two floats are equal within the given tolerances.
///
/// The values are close when their difference is no larger than the greater
/// of `abs_tol` and `rel_tol` times the larger magnitude. NaN is never close
/// to anything.
///
/// # Example
/// ```
/// use calculator::util::num::{ABS_TOLERANCE, REL_TOLERANCE, is_close};
///
/// assert!(is_close(0.1 + 0.2, 0.3, ABS_TOLERANCE, REL_TOLERANCE));
/// assert!(!is_close(1.0, 1.1, ABS_TOLERANCE, REL_TOLERANCE));
/// ```
#[must_use]
pub fn is_close(left: f64, right: f64, abs_tol: f64, rel_tol: f64) -> bool {
    if left == right {
        return true;
    }
    let difference = (left - right).abs();
    let max_norm = left.abs().max(right.abs());
    difference <= abs_tol.max(rel_tol * max_norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinities_and_nan() {
        assert!(is_close(f64::INFINITY, f64::INFINITY, ABS_TOLERANCE, REL_TOLERANCE));
        assert!(!is_close(f64::NAN, f64::NAN, ABS_TOLERANCE, REL_TOLERANCE));
    }

    #[test]
    fn absolute_tolerance_covers_zero() {
        assert!(!is_close(0.0, 1e-12, ABS_TOLERANCE, REL_TOLERANCE));
        assert!(is_close(0.0, 1e-12, 1e-9, REL_TOLERANCE));
    }
}
