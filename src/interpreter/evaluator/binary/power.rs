use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::type_error,
        },
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::{i64_to_f64, i64_to_u32_checked},
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation uses checked arithmetic. Negative integer
    /// exponents are computed in floating-point form. Complex bases support
    /// both integer and real exponents, and any complex exponent goes through
    /// `exp(w * ln z)`. A negative real base with a fractional exponent yields
    /// the principal complex root.
    ///
    /// A finite real base and exponent whose power is infinite is an overflow,
    /// or a division by zero when the base is zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `expr`: The node being evaluated, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ** exponent`.
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
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10), &expr).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1), &expr).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    ///
    /// let result = Context::eval_pow(&Value::Integer(-8), &Value::Real(0.5), &expr).unwrap();
    /// assert!(matches!(result, Value::Complex(_)));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, expr: &Expr) -> EvalResult<Value> {
        use Value::{Complex, Integer, Real, Text};

        match (base, exponent) {
            (Text(_), _) | (_, Text(_)) => {
                Err(type_error(format!("cannot raise {} to the power of {}",
                                       base.type_name(),
                                       exponent.type_name()),
                               expr))
            },
            (Integer(b), Integer(e)) => {
                if *e < 0 {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
                    }
                    Ok(Real(i64_to_f64(*b).powf(i64_to_f64(*e))))
                } else {
                    match b {
                        0 if *e == 0 => Ok(Integer(1)),
                        0 | 1 => Ok(Integer(*b)),
                        -1 => Ok(Integer(if e % 2 == 0 { 1 } else { -1 })),
                        _ => b.checked_pow(i64_to_u32_checked(*e, expr)?)
                              .map(Integer)
                              .ok_or_else(|| RuntimeError::Overflow { fragment: expr.to_string() }),
                    }
                }
            },
            (_, Complex(e)) => Ok(Complex(base.as_complex(expr)?.powc(*e))),
            (Complex(b), Integer(e)) => b.checked_powi(*e, expr),
            (Complex(b), Real(e)) => Ok(Complex(b.powf(*e))),
            _ => {
                let b = base.as_real(expr)?;
                let e = exponent.as_real(expr)?;

                if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
                    return Ok(Complex(ComplexNumber::from(b).powf(e)));
                }

                let result = b.powf(e);
                if result.is_infinite() && b.is_finite() && e.is_finite() {
                    return Err(if b == 0.0 {
                                   RuntimeError::DivisionByZero { fragment: expr.to_string() }
                               } else {
                                   RuntimeError::Overflow { fragment: expr.to_string() }
                               });
                }
                Ok(Real(result))
            },
        }
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
    fn integer_power_overflows() {
        let expr = Expr::variable("x");
        let err = Context::eval_pow(&Value::Integer(2), &Value::Integer(100), &expr);
        assert!(matches!(err, Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn unit_bases_accept_huge_exponents() {
        let expr = Expr::variable("x");
        let huge = Value::Integer(5_000_000_001);
        let cases = [(0, 0), (1, 1), (-1, -1)];
        for (base, expected) in cases {
            let r = Context::eval_pow(&Value::Integer(base), &huge, &expr).unwrap();
            assert_eq!(r, Value::Integer(expected));
        }

        let err = Context::eval_pow(&Value::Integer(2), &huge, &expr);
        assert!(matches!(err, Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn zero_to_a_negative_power_divides_by_zero() {
        let expr = Expr::variable("x");
        for exponent in [Value::Integer(-1), Value::Real(-0.5)] {
            let err = Context::eval_pow(&Value::Integer(0), &exponent, &expr);
            assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
        }
    }

    #[test]
    fn real_power_overflow_is_reported() {
        let expr = Expr::variable("x");
        let err = Context::eval_pow(&Value::Real(10.0), &Value::Integer(400), &expr);
        assert!(matches!(err, Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn negative_base_with_fractional_exponent_is_complex() {
        let expr = Expr::variable("x");
        let Value::Complex(c) = Context::eval_pow(&Value::Integer(-4), &Value::Real(0.5), &expr).unwrap() else {
            panic!("expected a complex result");
        };
        assert!(c.real.abs() < 1e-12);
        assert!((c.imaginary - 2.0).abs() < 1e-12);
    }
}
