use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, checked_factorial, type_error},
        },
        value::core::Value,
    },
};

/// Computes `n!` for an integer or an integral real.
///
/// Negative and fractional inputs are outside the domain. Results that do not
/// fit in `i64` fall back to a real up to `170!`.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::factorial::factorial_value, value::core::Value},
/// };
///
/// let expr = Expr::variable("n");
///
/// assert_eq!(factorial_value(&Value::Integer(8), &expr).unwrap(), Value::Integer(40320));
/// assert_eq!(factorial_value(&Value::Real(5.0), &expr).unwrap(), Value::Integer(120));
/// assert!(factorial_value(&Value::Real(2.5), &expr).is_err());
/// ```
pub fn factorial_value(value: &Value, expr: &Expr) -> EvalResult<Value> {
    let n = match value {
        Value::Integer(_) | Value::Real(_) => value.as_integer(expr)?,
        _ => {
            return Err(type_error(format!("factorial is not defined for {}", value.type_name()),
                                  expr));
        },
    };

    checked_factorial(n, expr)
}

/// The `factorial(n)` builtin.
pub fn factorial(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("factorial", args, 1)?;

    factorial_value(&args[0], expr)
}
