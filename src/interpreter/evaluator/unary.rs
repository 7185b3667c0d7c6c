use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::factorial::factorial_value,
            utils::type_error,
        },
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::i64_to_f64,
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers, reals and complex numbers.
    ///   Negating `i64::MIN` is an overflow.
    /// - `Percent`: divides by 100; the result is always real or complex.
    /// - `Factorial`: `n!` for integers and integral reals.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `expr`: The node being evaluated, for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::variable("x");
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), &expr).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Percent, &Value::Integer(2), &expr).unwrap();
    /// assert_eq!(v, Value::Real(0.02));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Factorial, &Value::Integer(4), &expr).unwrap();
    /// assert_eq!(v, Value::Integer(24));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, expr: &Expr) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => {
                    n.checked_neg()
                     .map(Value::Integer)
                     .ok_or_else(|| RuntimeError::Overflow { fragment: expr.to_string() })
                },
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Complex(c) => Ok(Value::Complex(-*c)),
                Value::Text(_) => Err(type_error("cannot negate text", expr)),
            },
            UnaryOperator::Percent => match value {
                Value::Integer(n) => Ok(Value::Real(i64_to_f64(*n) / 100.0)),
                Value::Real(r) => Ok(Value::Real(r / 100.0)),
                Value::Complex(c) => Ok(Value::Complex(*c / ComplexNumber::from(100.0))),
                Value::Text(_) => Err(type_error("cannot take a percentage of text", expr)),
            },
            UnaryOperator::Factorial => factorial_value(value, expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, UnaryOperator},
        error::RuntimeError,
        interpreter::{evaluator::core::Context, value::core::Value},
    };

    #[test]
    fn negating_the_minimum_integer_overflows() {
        let expr = Expr::variable("n");
        let err = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), &expr);
        assert!(matches!(err, Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn factorial_rejects_fractions_and_negatives() {
        let expr = Expr::variable("n");
        for value in [Value::Real(2.5), Value::Integer(-1)] {
            let err = Context::eval_unary(UnaryOperator::Factorial, &value, &expr);
            assert!(matches!(err, Err(RuntimeError::InvalidArgument { .. })));
        }
    }
}
