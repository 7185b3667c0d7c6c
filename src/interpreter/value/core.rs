use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
    util::num::{f64_to_i64_checked, i64_to_f64},
};

/// Represents the result of evaluating an expression.
///
/// Integral results stay `Integer` so callers can re-render them in other
/// bases; `Text` is only produced for degenerate (empty) queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
    /// A passthrough string.
    Text(String),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not a real
    /// number.
    ///
    /// # Parameters
    /// - `expr`: The expression being evaluated, for error reporting.
    ///
    /// # Example
    /// ```
    /// use engcalc::{ast::Expr, interpreter::value::core::Value};
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(&Expr::variable("x")).unwrap(), 10.0);
    /// ```
    pub fn as_real(&self, expr: &Expr) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeError { details:  format!("expected a real number, found {}",
                                                                 self.type_name()),
                                               fragment: expr.to_string(), }),
        }
    }

    /// Converts the value to a `ComplexNumber`, or returns an error if it is
    /// not numeric.
    pub fn as_complex(&self, expr: &Expr) -> EvalResult<ComplexNumber> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Real(r) => Ok(ComplexNumber::from(*r)),
            Self::Integer(n) => Ok(ComplexNumber::from(i64_to_f64(*n))),
            Self::Text(_) => Err(RuntimeError::TypeError { details:  "expected a number, found text".to_string(),
                                                           fragment: expr.to_string(), }),
        }
    }

    /// Converts an integer or an integral real to `i64`.
    ///
    /// # Example
    /// ```
    /// use engcalc::{ast::Expr, interpreter::value::core::Value};
    ///
    /// let expr = Expr::variable("n");
    ///
    /// assert_eq!(Value::Integer(42).as_integer(&expr).unwrap(), 42);
    /// assert_eq!(Value::Real(10.0).as_integer(&expr).unwrap(), 10);
    /// assert!(Value::Real(1.23).as_integer(&expr).is_err());
    /// ```
    pub fn as_integer(&self, expr: &Expr) -> EvalResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Real(r) => f64_to_i64_checked(*r, expr),
            _ => Err(RuntimeError::TypeError { details:  format!("expected an integer, found {}",
                                                                 self.type_name()),
                                               fragment: expr.to_string(), }),
        }
    }

    /// Returns the absolute value (magnitude for complex numbers).
    pub fn abs(&self, expr: &Expr) -> EvalResult<Self> {
        match self {
            Self::Complex(c) => Ok(c.abs().into()),
            Self::Integer(i) => i.checked_abs()
                                 .map(Self::Integer)
                                 .ok_or_else(|| RuntimeError::Overflow { fragment: expr.to_string() }),
            _ => Ok(Self::Real(self.as_real(expr)?.abs())),
        }
    }

    /// Returns the signum of a real value.
    pub fn sign(&self, expr: &Expr) -> EvalResult<Self> {
        match self {
            Self::Integer(i) => Ok(i.signum().into()),
            Self::Real(r) if *r == 0.0 => Ok(Self::Real(0.0)),
            Self::Real(r) => Ok(r.signum().into()),
            _ => Err(RuntimeError::TypeError { details:  format!("sign is not defined for {}",
                                                                 self.type_name()),
                                               fragment: expr.to_string(), }),
        }
    }

    /// A short human-readable name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Complex(_) => "complex",
            Self::Text(_) => "text",
        }
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Complex(complex) => (*complex).into(),
        }
    }
}
