use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{core::EvalResult, utils::type_error},
        value::core::Value,
    },
};

/// Computes the minimum or maximum of one or more real values.
///
/// - If every argument is an integer, the result is an integer.
/// - Otherwise the comparison is performed on real values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Complex and text arguments produce a `TypeError`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: At least one argument.
/// - `expr`: The call node, for error reporting.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::min_max::min_max, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7), Value::Integer(-1)], &expr);
/// assert_eq!(r.unwrap(), (-1).into());
///
/// let r = min_max("max", &[Value::Real(2.5), Value::Integer(1)], &expr);
/// assert_eq!(r.unwrap(), 2.5.into());
/// ```
pub fn min_max(name: &str, args: &[Value], expr: &Expr) -> EvalResult<Value> {
    let is_min = name == "min";

    if let Some(other) = args.iter()
                             .find(|v| matches!(v, Value::Complex(_) | Value::Text(_)))
    {
        return Err(type_error(format!("{name} is not defined for {}", other.type_name()),
                              expr));
    }

    if args.iter().all(Value::is_integer) {
        let values = args.iter().map(|v| v.as_integer(expr)).collect::<EvalResult<Vec<_>>>()?;
        let value = if is_min { values.iter().min() } else { values.iter().max() };
        return value.map(|v| Value::Integer(*v))
                    .ok_or_else(|| type_error(format!("{name} needs at least one argument"), expr));
    }

    let values = args.iter().map(|v| v.as_real(expr)).collect::<EvalResult<Vec<_>>>()?;
    values.into_iter()
          .reduce(if is_min { f64::min } else { f64::max })
          .map(Value::Real)
          .ok_or_else(|| type_error(format!("{name} needs at least one argument"), expr))
}
