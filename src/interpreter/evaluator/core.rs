use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Variable bindings supplied by the caller for one evaluation.
pub type Environment = HashMap<String, Value>;

/// Stores the runtime evaluation context.
///
/// The context only borrows the caller's environment; evaluation never
/// mutates it and keeps no state between calls.
///
/// ## Example
/// ```
/// use engcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         evaluator::core::{Context, Environment},
///         value::core::Value,
///     },
/// };
///
/// let mut environment = Environment::new();
/// environment.insert("x".to_string(), Value::Integer(4));
///
/// let context = Context::new(&environment);
/// let expr = Expr::binary(Expr::variable("x"), BinaryOperator::Mul, Expr::literal(3));
/// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(12));
/// ```
pub struct Context<'env> {
    /// The caller's variable bindings.
    pub environment: &'env Environment,
}

impl<'env> Context<'env> {
    /// Creates a context that resolves variables against `environment`.
    #[must_use]
    pub const fn new(environment: &'env Environment) -> Self {
        Self { environment }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated first, left to right; the node itself is handed to the
    /// operator implementations so that errors can name the failing
    /// sub-expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr: operand } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, expr)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, expr)
            },
            Expr::Parallel { operands } => {
                let values = operands.iter()
                                     .map(|operand| self.eval(operand))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_parallel(&values, expr)
            },
            Expr::FunctionCall { name, arguments } => {
                self.eval_function_call(name, arguments, expr)
            },
        }
    }
}
