use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to the nearest `f64`.
///
/// Integers above `2^53` in magnitude round to the nearest
/// representable real, the same way mixed integer/real arithmetic does in
/// any floating-point calculator.
///
/// ## Example
/// ```
/// use engcalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// - `InvalidArgument` for non-finite or fractional values.
/// - `Overflow` for values outside the `i64` range.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `expr`: The expression being evaluated, for error reporting.
///
/// # Example
/// ```
/// use engcalc::{ast::Expr, error::RuntimeError, util::num::f64_to_i64_checked};
///
/// let expr = Expr::variable("x");
///
/// assert_eq!(f64_to_i64_checked(1000.0, &expr).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5, &expr).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
///
/// let err = f64_to_i64_checked(1e20, &expr).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, expr: &Expr) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details:  format!("cannot convert non-finite value {value} to an integer"),
                                                   fragment: expr.to_string(), });
    }
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { fragment: expr.to_string() });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details:  format!("{value} is not an integer"),
                                                   fragment: expr.to_string(), });
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to `u32`, as used for integer exponents.
///
/// ## Errors
/// - `InvalidArgument` for negative values.
/// - `Overflow` for values above `u32::MAX`.
///
/// # Example
/// ```
/// use engcalc::{ast::Expr, error::RuntimeError, util::num::i64_to_u32_checked};
///
/// let expr = Expr::variable("n");
///
/// assert_eq!(i64_to_u32_checked(45, &expr).unwrap(), 45);
///
/// let err = i64_to_u32_checked(i64::MAX, &expr).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
pub fn i64_to_u32_checked(value: i64, expr: &Expr) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::InvalidArgument { details:  format!("{value} must not be negative"),
                                                   fragment: expr.to_string(), });
    }
    u32::try_from(value).map_err(|_| RuntimeError::Overflow { fragment: expr.to_string() })
}
