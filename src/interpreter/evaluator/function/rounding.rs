use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, type_error},
        },
        value::core::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Rounds a real value to an integer with `floor`, `ceil` or `trunc`.
///
/// Accepts exactly one argument.
/// - Integers are returned unchanged.
/// - Reals are rounded and converted to an integer; infinities, NaN and
///   values outside the `i64` range are errors.
///
/// # Parameters
/// - `name`: One of `"floor"`, `"ceil"` or `"trunc"`.
/// - `args`: Slice containing one argument.
/// - `expr`: The call node, for error reporting.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::rounding::unary_round, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// let r = unary_round("trunc", &[Value::Real(-3.7)], &expr).unwrap();
/// assert_eq!(r, (-3).into());
///
/// let r = unary_round("floor", &[Value::Real(-3.2)], &expr).unwrap();
/// assert_eq!(r, (-4).into());
///
/// let r = unary_round("ceil", &[Value::Integer(-5)], &expr).unwrap();
/// assert_eq!(r, (-5).into());
/// ```
pub fn unary_round(name: &str, args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity(name, args, 1)?;

    match &args[0] {
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Real(r) => {
            let rounded = match name {
                "floor" => r.floor(),
                "ceil" => r.ceil(),
                _ => r.trunc(),
            };
            f64_to_i64_checked(rounded, expr).map(Value::Integer)
        },
        other => Err(type_error(format!("{name} is not defined for {}", other.type_name()), expr)),
    }
}

/// Rounds `x` to `digits` decimal places, halves to even.
///
/// Negative `digits` round to tens, hundreds and so on. Past the range of
/// `f64` the result is a zero carrying the sign of `x`.
fn round_to(x: f64, digits: i64) -> f64 {
    let scale = 10f64.powi(i32::try_from(digits.unsigned_abs()).unwrap_or(i32::MAX));

    if digits >= 0 {
        let scaled = x * scale;
        if scaled.is_finite() { scaled.round_ties_even() / scale } else { x }
    } else if scale.is_infinite() {
        0.0_f64.copysign(x)
    } else {
        (x / scale).round_ties_even() * scale
    }
}

/// Rounds to the nearest integer, or to a number of decimal places.
///
/// - `round(x)` rounds half to even and returns an integer.
/// - `round(x, n)` returns a real for real `x`. An integer `x` stays an
///   integer.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::rounding::round, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// assert_eq!(round(&[Value::Real(2.5)], &expr).unwrap(), Value::Integer(2));
/// assert_eq!(round(&[Value::Real(3.5)], &expr).unwrap(), Value::Integer(4));
/// assert_eq!(round(&[Value::Real(3.14159), Value::Integer(2)], &expr).unwrap(),
///            Value::Real(3.14));
/// assert_eq!(round(&[Value::Integer(1234), Value::Integer(-2)], &expr).unwrap(),
///            Value::Integer(1200));
/// ```
pub fn round(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    let (value, digits) = match args {
        [value] => (value, None),
        [value, digits] => (value, Some(digits.as_integer(expr)?)),
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name:     "round".to_string(),
                                                             expected: "1 or 2".to_string(),
                                                             found:    args.len(), });
        },
    };

    match (value, digits) {
        (Value::Integer(i), None) => Ok(Value::Integer(*i)),
        (Value::Real(r), None) => f64_to_i64_checked(r.round_ties_even(), expr).map(Value::Integer),
        (Value::Integer(i), Some(n)) if n >= 0 => Ok(Value::Integer(*i)),
        (Value::Integer(_), Some(n)) => {
            f64_to_i64_checked(round_to(value.as_real(expr)?, n), expr).map(Value::Integer)
        },
        (Value::Real(r), Some(n)) => Ok(Value::Real(round_to(*r, n))),
        (other, _) => {
            Err(type_error(format!("round is not defined for {}", other.type_name()), expr))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::round;
    use crate::{ast::Expr, interpreter::value::core::Value};

    #[test]
    fn negative_digits_round_to_powers_of_ten() {
        let expr = Expr::variable("x");
        assert_eq!(round(&[Value::Real(1234.5), Value::Integer(-2)], &expr).unwrap(),
                   Value::Real(1200.0));
        assert_eq!(round(&[Value::Integer(1250), Value::Integer(-2)], &expr).unwrap(),
                   Value::Integer(1200));
    }

    #[test]
    fn digits_beyond_the_real_range_give_a_signed_zero() {
        let expr = Expr::variable("x");
        let Value::Real(r) = round(&[Value::Real(5.0), Value::Integer(-400)], &expr).unwrap() else {
            panic!("expected a real");
        };
        assert!(r == 0.0 && r.is_sign_positive());

        let Value::Real(r) = round(&[Value::Real(-5.0), Value::Integer(-400)], &expr).unwrap() else {
            panic!("expected a real");
        };
        assert!(r == 0.0 && r.is_sign_negative());
    }
}
