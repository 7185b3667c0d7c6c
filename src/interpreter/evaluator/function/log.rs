use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, invalid_argument, real_result, type_error},
        },
        value::core::Value,
    },
};

/// Applies a logarithm to one value.
///
/// Positive reals use `real_log` directly. Negative reals and complex values
/// take the principal complex logarithm scaled by `1 / ln(base)`, where
/// `ln_base` is `ln(base)` for the logarithm being computed. Zero has no
/// logarithm.
fn apply_log(value: &Value, expr: &Expr, real_log: fn(f64) -> f64, ln_base: f64) -> EvalResult<Value> {
    let zero = || invalid_argument("logarithm of zero is undefined", expr);

    match value {
        Value::Integer(_) | Value::Real(_) => {
            let x = value.as_real(expr)?;
            if x == 0.0 {
                return Err(zero());
            }
            if x < 0.0 {
                return apply_log(&Value::Complex(value.as_complex(expr)?), expr, real_log, ln_base);
            }
            real_result(real_log(x), x, expr)
        },
        Value::Complex(c) => {
            if c.is_zero() {
                return Err(zero());
            }
            Ok(Value::Complex(c.ln() / ln_base.into()))
        },
        Value::Text(_) => Err(type_error("logarithm of text is undefined", expr)),
    }
}

/// Natural logarithm.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::log::ln, value::core::Value},
/// };
///
/// let r = ln(&[Value::Integer(1)], &Expr::variable("x")).unwrap();
/// assert_eq!(r, Value::Real(0.0));
///
/// // ln(-1) = πj
/// let Value::Complex(c) = ln(&[Value::Integer(-1)], &Expr::variable("x")).unwrap() else {
///     panic!("expected a complex result");
/// };
/// assert_eq!(c.imaginary, std::f64::consts::PI);
/// ```
pub fn ln(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("ln", args, 1)?;

    apply_log(&args[0], expr, f64::ln, 1.0)
}

/// Base-10 logarithm.
pub fn log10(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("log10", args, 1)?;

    apply_log(&args[0], expr, f64::log10, std::f64::consts::LN_10)
}

/// Base-2 logarithm.
pub fn log2(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("log2", args, 1)?;

    apply_log(&args[0], expr, f64::log2, std::f64::consts::LN_2)
}

/// Computes the logarithm of a value, in base `e` or a given base.
///
/// With one argument this is `ln(value)`. With two it is
/// `ln(value) / ln(base)`, computed over the reals when both logarithms are
/// real and over the complex numbers otherwise.
///
/// Division by zero occurs when `ln(base)` equals zero, i.e. for base 1.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::log::log, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// let Value::Real(r) = log(&[Value::Integer(8), Value::Integer(2)], &expr).unwrap() else {
///     panic!("expected a real result");
/// };
/// assert!((r - 3.0).abs() < 1e-12);
///
/// assert!(log(&[Value::Integer(8), Value::Integer(1)], &expr).is_err());
/// ```
pub fn log(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    if args.len() == 1 {
        return ln(args, expr);
    }
    check_arity("log", args, 2)?;

    let ln_value = apply_log(&args[0], expr, f64::ln, 1.0)?;
    let ln_base = apply_log(&args[1], expr, f64::ln, 1.0)?;

    match (&ln_value, &ln_base) {
        (Value::Real(v), Value::Real(b)) => {
            if *b == 0.0 {
                return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
            }
            Ok(Value::Real(v / b))
        },
        _ => {
            let b = ln_base.as_complex(expr)?;
            if b.is_zero() {
                return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
            }
            Ok(Value::Complex(ln_value.as_complex(expr)? / b))
        },
    }
}
