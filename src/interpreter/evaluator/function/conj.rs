use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, type_error},
        },
        value::core::Value,
    },
};
/// Returns the complex conjugate of a numeric value.
///
/// Accepts exactly one argument.
/// - Complex numbers return their conjugate.
/// - Real and integer values are returned unchanged.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{
///         evaluator::function::conj::conj,
///         value::{complex::ComplexNumber, core::Value},
///     },
/// };
///
/// let z = Value::Complex(ComplexNumber::new(3.0, -4.0));
/// let r = conj(&[z], &Expr::variable("z")).unwrap();
///
/// assert_eq!(r, Value::Complex(ComplexNumber::new(3.0, 4.0)));
/// ```
pub fn conj(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("conj", args, 1)?;

    match &args[0] {
        Value::Complex(c) => Ok(Value::Complex(c.conj())),
        Value::Real(r) => Ok(Value::Real(*r)),
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Text(_) => Err(type_error("conj expects a number", expr)),
    }
}
