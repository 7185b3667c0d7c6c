use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`, modulo to `eval_mod`,
    /// power to `eval_pow` and the bitwise operators to `eval_bitwise`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `expr`: The node being evaluated, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let expr = Expr::binary(Expr::literal(3), BinaryOperator::Add, Expr::literal(4));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, &expr);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       expr: &Expr)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, BitAnd, BitXor, Div, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, expr),
            Mod => Self::eval_mod(left, right, expr),
            Pow => Self::eval_pow(left, right, expr),
            BitAnd | BitXor => Self::eval_bitwise(op, left, right, expr),
        }
    }
}
