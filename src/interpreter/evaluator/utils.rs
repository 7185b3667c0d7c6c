use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// The largest `n` whose factorial is finite as an `f64`.
pub const MAX_REAL_FACTORIAL: i64 = 170;

impl Context<'_> {
    /// Looks up a variable by name in the environment.
    ///
    /// # Errors
    /// `UnknownVariable` if the name is not bound.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::{
    ///     evaluator::core::{Context, Environment},
    ///     value::core::Value,
    /// };
    ///
    /// let mut environment = Environment::new();
    /// environment.insert("x".to_string(), Value::Integer(10));
    ///
    /// let context = Context::new(&environment);
    /// assert_eq!(context.eval_variable("x").unwrap(), Value::Integer(10));
    /// assert!(context.eval_variable("y").is_err());
    /// ```
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}

/// Builds a `TypeError` for an operand the operation cannot handle.
pub fn type_error(details: impl Into<String>, expr: &Expr) -> RuntimeError {
    RuntimeError::TypeError { details:  details.into(),
                              fragment: expr.to_string(), }
}

/// Builds an `InvalidArgument` error for an operand outside the domain.
pub fn invalid_argument(details: impl Into<String>, expr: &Expr) -> RuntimeError {
    RuntimeError::InvalidArgument { details:  details.into(),
                                    fragment: expr.to_string(), }
}

/// Wraps the result of a real function, rejecting NaN produced from a
/// non-NaN input (e.g. `asin(2)`) and infinities produced from a finite one
/// (e.g. `exp(1000)`).
///
/// ## Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::utils::real_result, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
/// assert_eq!(real_result(0.5, 0.25, &expr).unwrap(), Value::Real(0.5));
/// assert!(real_result(f64::NAN, 2.0, &expr).is_err());
/// assert!(real_result(f64::NAN, f64::NAN, &expr).is_ok());
/// assert!(real_result(f64::INFINITY, 1000.0, &expr).is_err());
/// ```
pub fn real_result(result: f64, input: f64, expr: &Expr) -> EvalResult<Value> {
    if result.is_nan() && !input.is_nan() {
        return Err(invalid_argument(format!("{input} is outside the domain"), expr));
    }
    if result.is_infinite() && input.is_finite() {
        return Err(RuntimeError::Overflow { fragment: expr.to_string() });
    }
    Ok(Value::Real(result))
}

/// Ensures a builtin received exactly `expected` arguments.
///
/// The function table checks arity before dispatch; this guards direct
/// calls to the builtin functions.
pub fn check_arity(name: &str, args: &[Value], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                  expected: expected.to_string(),
                                                  found:    args.len(), })
    }
}

/// Computes `n!` for a non-negative `n`.
///
/// The result stays an integer while it fits in `i64` and falls back to a
/// real up to `170!`.
///
/// ## Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::utils::checked_factorial, value::core::Value},
/// };
///
/// let expr = Expr::variable("n");
///
/// assert_eq!(checked_factorial(0, &expr).unwrap(), Value::Integer(1));
/// assert_eq!(checked_factorial(5, &expr).unwrap(), Value::Integer(120));
/// assert!(matches!(checked_factorial(25, &expr).unwrap(), Value::Real(_)));
/// assert!(checked_factorial(171, &expr).is_err());
/// ```
///
/// ## Returns
/// - `Ok(Value)`: The computed factorial.
/// - `Err(RuntimeError::Overflow)`: If `n > 170`.
/// - `Err(RuntimeError::InvalidArgument)`: If `n` is negative.
pub fn checked_factorial(n: i64, expr: &Expr) -> EvalResult<Value> {
    if n < 0 {
        return Err(invalid_argument(format!("factorial is not defined for {n}"), expr));
    }

    let exact = (2..=n).try_fold(1i64, i64::checked_mul);
    if let Some(result) = exact {
        return Ok(Value::Integer(result));
    }

    if n > MAX_REAL_FACTORIAL {
        return Err(RuntimeError::Overflow { fragment: expr.to_string() });
    }

    Ok(Value::Real((2..=n).map(i64_to_f64).product()))
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// This implementation uses the standard 9-term Lanczos coefficients
/// (`g = 7`) and supports all finite real inputs except negative integers and
/// zero, where the gamma function has poles.
///
/// For `z < 0.5`, the reflection formula is applied:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// # Errors
/// `InvalidArgument` at the poles.
///
/// # Example
/// ```
/// use engcalc::{ast::Expr, interpreter::evaluator::utils::euler_gamma};
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0, &Expr::variable("z")).unwrap();
/// assert!((g - 24.0).abs() < 1e-12);
/// ```
pub fn euler_gamma(z: f64, expr: &Expr) -> EvalResult<f64> {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z <= 0.0 && z.fract() == 0.0 {
        return Err(invalid_argument(format!("gamma has a pole at {z}"), expr));
    }

    if z < 0.5 {
        Ok(std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z, expr)?))
    } else {
        let z_minus_1 = z - 1.0;
        let mut x = COEFFS[0];

        for (offset, &c) in (1..).map(f64::from).zip(COEFFS.iter().skip(1)) {
            x += c / (z_minus_1 + offset);
        }

        let t = z_minus_1 + G + 0.5;

        Ok((std::f64::consts::TAU).sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x)
    }
}
