use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::type_error,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates bitwise AND (`&`) and XOR (`^`).
    ///
    /// Both operands must be integers or integral reals; the result is always
    /// an integer.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::variable("x");
    /// let r = Context::eval_bitwise(BinaryOperator::BitXor,
    ///                               &Value::Integer(5),
    ///                               &Value::Real(1.0),
    ///                               &expr).unwrap();
    /// assert_eq!(r, Value::Integer(4));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        expr: &Expr)
                        -> EvalResult<Value> {
        let a = left.as_integer(expr)?;
        let b = right.as_integer(expr)?;

        match op {
            BinaryOperator::BitAnd => Ok(Value::Integer(a & b)),
            BinaryOperator::BitXor => Ok(Value::Integer(a ^ b)),
            _ => Err(type_error(format!("{op} is not a bitwise operator"), expr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        error::RuntimeError,
        interpreter::{evaluator::core::Context, value::core::Value},
    };

    #[test]
    fn fractional_operands_are_rejected() {
        let expr = Expr::variable("x");
        let err = Context::eval_bitwise(BinaryOperator::BitAnd,
                                        &Value::Real(1.5),
                                        &Value::Integer(1),
                                        &expr);
        assert!(matches!(err, Err(RuntimeError::InvalidArgument { .. })));
    }
}
