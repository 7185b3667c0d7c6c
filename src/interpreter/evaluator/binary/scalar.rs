use crate::{
    ast::{BinaryOperator, Expr},
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

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// The function handles integer, real and complex operands. Mixed types are
    /// promoted as needed. Integer arithmetic is checked, and `/` is true
    /// division, so two integers divide into a real. Dividing an integer or a
    /// complex number by zero is an error; real division follows IEEE rules
    /// and yields infinities or NaN.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `expr`: The node being evaluated, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::variable("x");
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul,
    ///                                      &Value::Real(1.5),
    ///                                      &Value::Real(2.0),
    ///                                      &expr).unwrap();
    /// assert_eq!(result, Value::Real(3.0));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div,
    ///                                      &Value::Integer(77),
    ///                                      &Value::Integer(2),
    ///                                      &expr).unwrap();
    /// assert_eq!(result, Value::Real(38.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          expr: &Expr)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Complex, Integer, Real, Text};

        let overflow = || RuntimeError::Overflow { fragment: expr.to_string() };

        match (left, right) {
            (Text(_), _) | (_, Text(_)) => {
                Err(type_error(format!("cannot apply {op} to {} and {}",
                                       left.type_name(),
                                       right.type_name()),
                               expr))
            },
            (Complex(_), _) | (_, Complex(_)) => {
                let left = left.as_complex(expr)?;
                let right = right.as_complex(expr)?;

                Ok(Complex(match op {
                               Add => left + right,
                               Sub => left - right,
                               Mul => left * right,
                               Div => {
                                   if right.is_zero() {
                                       return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
                                   }
                                   left / right
                               },
                               _ => return Err(type_error(format!("{op} is not arithmetic"), expr)),
                           }))
            },
            (Integer(a), Integer(b)) => match op {
                Add => a.checked_add(*b).map(Integer).ok_or_else(overflow),
                Sub => a.checked_sub(*b).map(Integer).ok_or_else(overflow),
                Mul => a.checked_mul(*b).map(Integer).ok_or_else(overflow),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { fragment: expr.to_string() })
                    } else {
                        Ok(Real(i64_to_f64(*a) / i64_to_f64(*b)))
                    }
                },
                _ => Err(type_error(format!("{op} is not arithmetic"), expr)),
            },
            _ => {
                let left = left.as_real(expr)?;
                let right = right.as_real(expr)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => left / right,
                            _ => return Err(type_error(format!("{op} is not arithmetic"), expr)),
                        }))
            },
        }
    }

    /// Evaluates floor modulo: the result takes the sign of the divisor.
    ///
    /// Integer modulo by zero is an error; real modulo by zero is NaN.
    /// Complex operands are rejected.
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
    /// let r = Context::eval_mod(&Value::Integer(-7), &Value::Integer(3), &expr).unwrap();
    /// assert_eq!(r, Value::Integer(2));
    ///
    /// let r = Context::eval_mod(&Value::Real(7.5), &Value::Integer(-2), &expr).unwrap();
    /// assert_eq!(r, Value::Real(-0.5));
    /// ```
    pub fn eval_mod(left: &Value, right: &Value, expr: &Expr) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
                }
                let r = a.checked_rem(*b)
                         .ok_or_else(|| RuntimeError::Overflow { fragment: expr.to_string() })?;
                Ok(Integer(if r != 0 && (r < 0) != (*b < 0) { r + b } else { r }))
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let a = left.as_real(expr)?;
                let b = right.as_real(expr)?;
                let r = a % b;
                Ok(Real(if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }))
            },
            _ => {
                Err(type_error(format!("cannot take {} modulo {}",
                                       left.type_name(),
                                       right.type_name()),
                               expr))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        error::RuntimeError,
        interpreter::{
            evaluator::core::Context,
            value::{complex::ComplexNumber, core::Value},
        },
    };

    #[test]
    fn integer_overflow_is_reported() {
        let expr = Expr::variable("x");
        let err = Context::eval_scalar_op(BinaryOperator::Add,
                                          &Value::Integer(i64::MAX),
                                          &Value::Integer(1),
                                          &expr);
        assert!(matches!(err, Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn division_by_zero_depends_on_operand_kind() {
        let expr = Expr::variable("x");

        let err = Context::eval_scalar_op(BinaryOperator::Div,
                                          &Value::Integer(1),
                                          &Value::Integer(0),
                                          &expr);
        assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));

        let result = Context::eval_scalar_op(BinaryOperator::Div,
                                             &Value::Real(1.0),
                                             &Value::Integer(0),
                                             &expr).unwrap();
        assert_eq!(result, Value::Real(f64::INFINITY));

        let err = Context::eval_scalar_op(BinaryOperator::Div,
                                          &Value::Complex(ComplexNumber::new(1.0, 1.0)),
                                          &Value::Integer(0),
                                          &expr);
        assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn modulo_follows_the_divisor_sign() {
        let expr = Expr::variable("x");
        assert_eq!(Context::eval_mod(&Value::Integer(7), &Value::Integer(-3), &expr).unwrap(),
                   Value::Integer(-2));
        assert_eq!(Context::eval_mod(&Value::Integer(6), &Value::Integer(3), &expr).unwrap(),
                   Value::Integer(0));
        assert!(matches!(Context::eval_mod(&Value::Integer(i64::MIN), &Value::Integer(-1), &expr),
                         Err(RuntimeError::Overflow { .. })));
    }
}
