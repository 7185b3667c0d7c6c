use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{check_arity, invalid_argument},
        },
        value::core::Value,
    },
};

/// Greatest common divisor of two integers (or integral reals).
///
/// The result is non-negative; `gcd(0, 0)` is `0`.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::integer::gcd, value::core::Value},
/// };
///
/// let r = gcd(&[Value::Integer(-12), Value::Integer(18)], &Expr::variable("x")).unwrap();
/// assert_eq!(r, Value::Integer(6));
/// ```
pub fn gcd(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("gcd", args, 2)?;

    let mut a = args[0].as_integer(expr)?.unsigned_abs();
    let mut b = args[1].as_integer(expr)?.unsigned_abs();

    while b != 0 {
        (a, b) = (b, a % b);
    }

    i64::try_from(a).map(Value::Integer)
                    .map_err(|_| RuntimeError::Overflow { fragment: expr.to_string() })
}

/// Binomial coefficient `n choose k`, also available as `comb`.
///
/// `k > n` gives `0`. Negative arguments are outside the domain.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::integer::binom, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// assert_eq!(binom(&[Value::Integer(5), Value::Integer(2)], &expr).unwrap(),
///            Value::Integer(10));
/// assert_eq!(binom(&[Value::Integer(2), Value::Integer(5)], &expr).unwrap(),
///            Value::Integer(0));
/// ```
pub fn binom(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    check_arity("binom", args, 2)?;

    let n = args[0].as_integer(expr)?;
    let k = args[1].as_integer(expr)?;

    if n < 0 || k < 0 {
        return Err(invalid_argument("binom expects non-negative integers", expr));
    }
    if k > n {
        return Ok(Value::Integer(0));
    }

    let k = k.min(n - k);
    let mut result: i128 = 1;

    // Each partial product is itself a binomial coefficient, so the division
    // is exact and the running value never exceeds the final one.
    for i in 1..=i128::from(k) {
        result = result * (i128::from(n) - i128::from(k) + i) / i;
        if result > i128::from(i64::MAX) {
            return Err(RuntimeError::Overflow { fragment: expr.to_string() });
        }
    }

    i64::try_from(result).map(Value::Integer)
                         .map_err(|_| RuntimeError::Overflow { fragment: expr.to_string() })
}

/// Power with an optional modulus.
///
/// `pow(x, y)` behaves like `x ** y`. `pow(x, y, m)` computes `x**y mod m`
/// for integers, with the result taking the sign of `m`.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::integer::pow, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// let r = pow(&[Value::Integer(2), Value::Integer(10)], &expr).unwrap();
/// assert_eq!(r, Value::Integer(1024));
///
/// let r = pow(&[Value::Integer(3), Value::Integer(200), Value::Integer(7)], &expr).unwrap();
/// assert_eq!(r, Value::Integer(2));
/// ```
pub fn pow(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    let [base, exponent, modulus] = match args {
        [base, exponent] => return Context::eval_pow(base, exponent, expr),
        [base, exponent, modulus] => [base, exponent, modulus].map(|v| v.as_integer(expr)),
        _ => {
            return Err(RuntimeError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                             expected: "2 or 3".to_string(),
                                                             found:    args.len(), });
        },
    };
    let (base, exponent, modulus) = (base?, exponent?, modulus?);

    if modulus == 0 {
        return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
    }
    if exponent < 0 {
        return Err(invalid_argument("pow with a modulus needs a non-negative exponent", expr));
    }

    let m = i128::from(modulus);
    let mut b = i128::from(base).rem_euclid(m.abs());
    let mut e = exponent;
    let mut result: i128 = 1 % m.abs();

    while e > 0 {
        if e % 2 == 1 {
            result = result * b % m.abs();
        }
        b = b * b % m.abs();
        e /= 2;
    }

    if result != 0 && modulus < 0 {
        result += m;
    }

    i64::try_from(result).map(Value::Integer)
                         .map_err(|_| RuntimeError::Overflow { fragment: expr.to_string() })
}
