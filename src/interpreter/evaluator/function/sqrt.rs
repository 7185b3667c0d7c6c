use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Computes square roots and n-th roots for numeric values.
///
/// - With one argument:
///   - Nonnegative integers and reals return a real square root.
///   - Negative integers and reals return a purely imaginary complex result.
///   - Complex values use their complex square root.
/// - With two arguments: Computes the n-th root: `args[0]^(1 / args[1])`. A
///   negative radicand with an odd integral root has a real (negative) root;
///   other negative radicands take the principal complex root. Zero is not
///   permitted as the root.
///
/// # Parameters
/// - `args`: Slice of one or two numeric arguments.
/// - `expr`: The call node, for error reporting.
///
/// # Returns
/// A real or complex value depending on the input.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::Expr,
///     interpreter::{evaluator::function::sqrt::sqrt, value::core::Value},
/// };
///
/// let expr = Expr::variable("x");
///
/// // Simple real square root
/// let r = sqrt(&[Value::Real(9.0)], &expr).unwrap();
/// assert_eq!(r, 3.0.into());
///
/// // 4th root of 16 -> 2
/// let r = sqrt(&[Value::Real(16.0), Value::Real(4.0)], &expr).unwrap();
/// assert_eq!(r, 2.0.into());
///
/// // cube root of -8 -> -2
/// let r = sqrt(&[Value::Integer(-8), Value::Integer(3)], &expr).unwrap();
/// assert_eq!(r, (-2.0).into());
/// ```
pub fn sqrt(args: &[Value], expr: &Expr) -> EvalResult<Value> {
    match args {
        [Value::Complex(c)] => Ok(Value::Complex(c.sqrt())),
        [value] => {
            let x = value.as_real(expr)?;
            if x < 0.0 {
                Ok(Value::Complex(ComplexNumber::new(0.0, (-x).sqrt())))
            } else {
                Ok(Value::Real(x.sqrt()))
            }
        },
        [value, root] => {
            let root = root.as_real(expr)?;
            if root == 0.0 {
                return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
            }

            if let Value::Complex(c) = value {
                return Ok(Value::Complex(c.powf(1.0 / root)));
            }

            let x = value.as_real(expr)?;
            if x >= 0.0 {
                return Ok(Value::Real(x.powf(1.0 / root)));
            }
            if root.fract() == 0.0 && root % 2.0 != 0.0 {
                return Ok(Value::Real(-(-x).powf(1.0 / root)));
            }
            Ok(Value::Complex(ComplexNumber::from(x).powf(1.0 / root)))
        },
        _ => Err(RuntimeError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                       expected: "1 or 2".to_string(),
                                                       found:    args.len(), }),
    }
}

#[cfg(test)]
mod tests {
    use super::sqrt;
    use crate::{
        ast::Expr,
        error::RuntimeError,
        interpreter::value::{complex::ComplexNumber, core::Value},
    };

    #[test]
    fn negative_radicand_is_imaginary() {
        let r = sqrt(&[Value::Integer(-4)], &Expr::variable("x")).unwrap();
        assert_eq!(r, Value::Complex(ComplexNumber::new(0.0, 2.0)));
    }

    #[test]
    fn zeroth_root_is_a_division_by_zero() {
        let err = sqrt(&[Value::Integer(4), Value::Integer(0)], &Expr::variable("x"));
        assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
    }
}
