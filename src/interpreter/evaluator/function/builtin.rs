use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{check_arity, euler_gamma, real_result, type_error},
        },
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Applies a unary builtin function to a numeric value.
///
/// The generated functions accept exactly one argument.
/// - Integers are converted to real numbers before applying the real function.
/// - Reals use the corresponding real builtin.
/// - Complex values use the complex variant.
///
/// A real result that leaves the domain (NaN or an overflow to infinity) is an
/// error. Text arguments produce a `TypeError`.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::builtin::sin, value::core::Value},
/// };
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], &Expr::variable("x")).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        pub fn $fname(args: &[Value], expr: &Expr) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1)?;

            match &args[0] {
                Value::Integer(_) | Value::Real(_) => {
                    let x = args[0].as_real(expr)?;
                    real_result(x.$real_fn(), x, expr)
                },
                Value::Complex(c) => Ok(Value::Complex(ComplexNumber::$complex_fn(*c))),
                Value::Text(_) => {
                    Err(type_error(concat!(stringify!($fname), " expects a number"), expr))
                },
            }
        }
    };
}

/// Like `real_complex_builtin`, for functions only defined on reals.
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], expr: &Expr) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1)?;

            let x = args[0].as_real(expr)?;
            real_result(x.$real_fn(), x, expr)
        }
    };
}

real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);
real_complex_builtin!(exp, exp, exp);
real_complex_builtin!(sinh, sinh, sinh);
real_complex_builtin!(cosh, cosh, cosh);
real_complex_builtin!(tanh, tanh, tanh);

real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(asinh, asinh);
real_builtin!(acosh, acosh);
real_builtin!(atanh, atanh);

/// Two-argument arctangent `atan2(y, x)`, in radians.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::builtin::atan2, value::core::Value},
/// };
///
/// let r = atan2(&[Value::Integer(1), Value::Integer(0)], &Expr::variable("x")).unwrap();
/// assert_eq!(r, Value::Real(std::f64::consts::FRAC_PI_2));
/// ```
pub fn atan2(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("atan2", args, 2)?;

    let y = args[0].as_real(expr)?;
    let x = args[1].as_real(expr)?;
    Ok(Value::Real(y.atan2(x)))
}

/// Euclidean distance `sqrt(x*x + y*y)` without intermediate overflow.
pub fn hypot(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("hypot", args, 2)?;

    let x = args[0].as_real(expr)?;
    let y = args[1].as_real(expr)?;
    Ok(Value::Real(x.hypot(y)))
}

/// Converts a numeric value from degrees to radians.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::builtin::radians, value::core::Value},
/// };
///
/// let r = radians(&[Value::Real(180.0)], &Expr::variable("x")).unwrap();
/// assert_eq!(r, Value::Real(std::f64::consts::PI));
/// ```
pub fn radians(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("radians", args, 1)?;

    Ok(Value::Real(args[0].as_real(expr)?.to_radians()))
}

/// Converts a numeric value from radians to degrees.
pub fn degrees(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("degrees", args, 1)?;

    Ok(Value::Real(args[0].as_real(expr)?.to_degrees()))
}

/// Returns the numeric sign of a value.
///
/// Integers return `-1`, `0` or `1`.
/// Reals return `-1.0`, `0.0` or `1.0`.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::builtin::sign, value::core::Value},
/// };
///
/// let s = sign(&[Value::Integer(-42)], &Expr::variable("x")).unwrap();
/// assert_eq!(s, Value::Integer(-1));
/// ```
pub fn sign(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("sign", args, 1)?;

    args[0].sign(expr)
}

/// Absolute value; the magnitude for complex numbers.
pub fn abs(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("abs", args, 1)?;

    args[0].abs(expr)
}

/// Squares a value, keeping integers integral.
pub fn sqr(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("sqr", args, 1)?;

    Context::eval_scalar_op(BinaryOperator::Mul, &args[0], &args[0], expr)
}

/// The gamma function Γ(x) for real arguments.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::builtin::gamma, value::core::Value},
/// };
///
/// let Value::Real(g) = gamma(&[Value::Real(0.5)], &Expr::variable("x")).unwrap() else {
///     panic!("expected a real");
/// };
/// assert!((g - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
pub fn gamma(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("gamma", args, 1)?;

    let x = args[0].as_real(expr)?;
    real_result(euler_gamma(x, expr)?, x, expr)
}

#[cfg(test)]
mod tests {
    use super::{acos, cosh, exp, sin};
    use crate::{
        ast::Expr,
        error::RuntimeError,
        interpreter::value::{complex::ComplexNumber, core::Value},
    };

    #[test]
    fn results_outside_the_real_domain_are_errors() {
        let expr = Expr::variable("x");
        assert!(matches!(acos(&[Value::Integer(2)], &expr),
                         Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(cosh(&[Value::Integer(1000)], &expr),
                         Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn complex_arguments_stay_complex() {
        let expr = Expr::variable("x");
        let r = exp(&[Value::Complex(ComplexNumber::new(0.0, std::f64::consts::PI))], &expr).unwrap();
        let Value::Complex(c) = r else {
            panic!("expected a complex result");
        };
        assert!((c.real + 1.0).abs() < 1e-12);
        assert!(c.imaginary.abs() < 1e-12);
    }

    #[test]
    fn text_is_rejected() {
        let expr = Expr::variable("x");
        assert!(matches!(sin(&[Value::Text(String::new())], &expr),
                         Err(RuntimeError::TypeError { .. })));
    }
}
