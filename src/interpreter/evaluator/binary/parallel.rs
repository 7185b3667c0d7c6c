use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::type_error,
        },
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Computes the numerator and denominator of the parallel combination.
///
/// The numerator is the product of all operands; the denominator sums, for
/// each operand from the last to the first, the product of all the others.
/// For three operands this adds `a*b + a*c + b*c` in that order, so the
/// result is bit-for-bit the textbook formula.
fn parallel_terms<T, F, G>(operands: &[T], mul: F, add: G) -> Option<(T, T)>
    where T: Copy,
          F: Fn(T, T) -> Option<T>,
          G: Fn(T, T) -> Option<T>
{
    let product = |skip: Option<usize>| {
        let mut others = operands.iter()
                                 .enumerate()
                                 .filter(|(j, _)| Some(*j) != skip)
                                 .map(|(_, v)| *v);
        let first = others.next()?;
        others.try_fold(first, &mul)
    };

    let numerator = product(None)?;

    let mut terms = (0..operands.len()).rev().map(|i| product(Some(i)));
    let first = terms.next()??;
    let denominator = terms.try_fold(first, |acc, term| add(acc, term?))?;

    Some((numerator, denominator))
}

impl Context<'_> {
    /// Evaluates the n-ary parallel combination `a // b // ... // n`.
    ///
    /// The result is `(a·b·…·n) / Σᵢ ∏_{j≠i} aⱼ`, the equivalent value of
    /// resistors in parallel. Integer operands use checked arithmetic and
    /// produce a real, falling back to real arithmetic when the products
    /// leave `i64`. A zero denominator is an error for integer and complex
    /// operands and follows IEEE rules for reals.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::variable("x");
    ///
    /// let r = Context::eval_parallel(&[Value::Integer(5), Value::Integer(6)], &expr).unwrap();
    /// assert_eq!(r, Value::Real(30.0 / 11.0));
    ///
    /// let r = Context::eval_parallel(&[Value::Integer(2), Value::Integer(3), Value::Integer(6)],
    ///                                &expr).unwrap();
    /// assert_eq!(r, Value::Real(1.0));
    /// ```
    pub fn eval_parallel(operands: &[Value], expr: &Expr) -> EvalResult<Value> {
        if operands.len() < 2 {
            return Err(type_error("parallel combination needs at least two operands", expr));
        }
        if operands.iter().any(|v| matches!(v, Value::Text(_))) {
            return Err(type_error("cannot combine text in parallel", expr));
        }

        let overflow = || RuntimeError::Overflow { fragment: expr.to_string() };
        let division_by_zero = || RuntimeError::DivisionByZero { fragment: expr.to_string() };

        if operands.iter().any(|v| matches!(v, Value::Complex(_))) {
            let values = operands.iter()
                                 .map(|v| v.as_complex(expr))
                                 .collect::<EvalResult<Vec<_>>>()?;
            let (numerator, denominator) =
                parallel_terms(&values, |a, b| Some(a * b), |a, b| Some(a + b)).ok_or_else(overflow)?;
            if denominator.is_zero() {
                return Err(division_by_zero());
            }
            return Ok(Value::Complex(numerator / denominator));
        }

        // Integer terms that overflow `i64` are recomputed in floating point.
        if operands.iter().all(Value::is_integer) {
            let values = operands.iter()
                                 .map(|v| v.as_integer(expr))
                                 .collect::<EvalResult<Vec<_>>>()?;
            if let Some((numerator, denominator)) =
                parallel_terms(&values, i64::checked_mul, i64::checked_add)
            {
                if denominator == 0 {
                    return Err(division_by_zero());
                }
                return Ok(Value::Real(i64_to_f64(numerator) / i64_to_f64(denominator)));
            }
        }

        let values = operands.iter()
                             .map(|v| v.as_real(expr))
                             .collect::<EvalResult<Vec<_>>>()?;
        let (numerator, denominator) =
            parallel_terms(&values, |a, b| Some(a * b), |a, b| Some(a + b)).ok_or_else(overflow)?;
        Ok(Value::Real(numerator / denominator))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Expr,
        error::RuntimeError,
        interpreter::{evaluator::core::Context, value::core::Value},
    };

    #[test]
    fn three_operands_match_the_closed_form() {
        let expr = Expr::variable("x");
        let (a, b, c) = (1.5, 2.25, 7.0);
        let r = Context::eval_parallel(&[Value::Real(a), Value::Real(b), Value::Real(c)], &expr)
            .unwrap();
        assert_eq!(r, Value::Real(a * b * c / (a * b + a * c + b * c)));
    }

    #[test]
    fn integer_zero_denominator_is_an_error() {
        let expr = Expr::variable("x");
        let err = Context::eval_parallel(&[Value::Integer(1), Value::Integer(-1)], &expr);
        assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn large_integer_operands_fall_back_to_reals() {
        let expr = Expr::variable("x");
        let (a, b, c) = (1e7, 2e7, 3e7);
        let r = Context::eval_parallel(&[Value::Integer(10_000_000),
                                         Value::Integer(20_000_000),
                                         Value::Integer(30_000_000)],
                                       &expr).unwrap();
        assert_eq!(r, Value::Real(a * b * c / (a * b + a * c + b * c)));

        let r = Context::eval_parallel(&[Value::Integer(5_000_000_000), Value::Integer(5_000_000_000)],
                                       &expr).unwrap();
        assert_eq!(r, Value::Real(2_500_000_000.0));
    }

    #[test]
    fn real_zero_denominator_propagates() {
        let expr = Expr::variable("x");
        let r = Context::eval_parallel(&[Value::Real(1.0), Value::Real(-1.0)], &expr).unwrap();
        assert_eq!(r, Value::Real(f64::NEG_INFINITY));
    }
}
