use std::{fmt::Display, ops};

use ordered_float::OrderedFloat;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// Formats the number the way it is written in a query: `2j` for a purely
/// imaginary number, `(1+2j)` otherwise.
impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (real, imaginary) if real == 0.0 => write!(f, "{imaginary}j"),
            (real, imaginary) if imaginary.is_sign_negative() => {
                write!(f, "({real}-{}j)", -imaginary)
            },
            (real, imaginary) => write!(f, "({real}+{imaginary}j)"),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.to_string(), "(5-1j)");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` if both parts are exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns `true` if both parts are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the reciprocal (1/z) of the complex number.
    #[must_use]
    pub const fn recip(&self) -> Self {
        let norm_squared = self.real * self.real + self.imaginary * self.imaginary;

        Self { real:      self.real / norm_squared,
               imaginary: -(self.imaginary / norm_squared), }
    }

    /// Returns the argument (phase angle) in radians.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Raises the complex number to an integer power by repeated squaring.
    ///
    /// # Errors
    /// - `DivisionByZero` when zero is raised to a negative power.
    /// - `Overflow` when an intermediate result stops being finite.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::Expr,
    ///     interpreter::value::complex::{ComplexNumber, ONE},
    /// };
    ///
    /// let expr = Expr::variable("z");
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert_eq!(c.checked_powi(0, &expr).unwrap(), ONE.into());
    /// assert_eq!(c.checked_powi(2, &expr).unwrap(),
    ///            ComplexNumber::new(-1.0, 0.0).into());
    /// ```
    pub fn checked_powi(self, exp: i64, expr: &Expr) -> EvalResult<Value> {
        if exp == 0 {
            return Ok(ONE.into());
        }

        if self.is_zero() && exp < 0 {
            return Err(RuntimeError::DivisionByZero { fragment: expr.to_string() });
        }

        let overflow = || RuntimeError::Overflow { fragment: expr.to_string() };

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
                if !result.is_finite() {
                    return Err(overflow());
                }
            }
            n /= 2;
            if n > 0 {
                base = base * base;
                if !base.is_finite() {
                    return Err(overflow());
                }
            }
        }

        if exp < 0 {
            result = result.recip();
            if !result.is_finite() {
                return Err(overflow());
            }
        }

        Ok(result.into())
    }

    /// Raises the complex number to a floating-point power, using the
    /// principal branch.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(-4.0, 0.0);
    /// let res = c.powf(0.5);
    /// assert!(res.real.abs() < 1e-10);
    /// assert!((res.imaginary - 2.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        if self.is_zero() {
            return if exp > 0.0 { ZERO } else { Self::new(f64::INFINITY, 0.0) };
        }

        let new_r = self.abs().powf(exp);
        let new_theta = self.arg() * exp;

        Self { real:      new_r * new_theta.cos(),
               imaginary: new_r * new_theta.sin(), }
    }

    /// Raises the complex number to a complex power, `exp(w * ln z)`.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        if self.is_zero() {
            return if exp.real > 0.0 { ZERO } else { Self::new(f64::INFINITY, 0.0) };
        }
        (exp * self.ln()).exp()
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(-9.0, 0.0);
    /// assert_eq!(c.sqrt(), ComplexNumber::new(0.0, 3.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b);

        Self { real, imaginary }
    }

    /// Returns the sine of the complex number.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns the hyperbolic sine of the complex number.
    #[must_use]
    pub fn sinh(self) -> Self {
        Self { real:      self.real.sinh() * self.imaginary.cos(),
               imaginary: self.real.cosh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic cosine of the complex number.
    #[must_use]
    pub fn cosh(self) -> Self {
        Self { real:      self.real.cosh() * self.imaginary.cos(),
               imaginary: self.real.sinh() * self.imaginary.sin(), }
    }

    /// Returns the hyperbolic tangent of the complex number.
    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use engcalc::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, std::f64::consts::PI);
    /// assert!((z.exp().real + 1.0).abs() < 1e-10);
    /// assert!(z.exp().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm of the complex number.
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

/// Component-wise equality where NaN equals NaN, so results containing NaN
/// still compare equal to themselves.
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_query_syntax() {
        assert_eq!(ComplexNumber::new(0.0, 2.0).to_string(), "2j");
        assert_eq!(ComplexNumber::new(1.0, 2.0).to_string(), "(1+2j)");
        assert_eq!(ComplexNumber::new(1.5, -0.5).to_string(), "(1.5-0.5j)");
        assert_eq!(ZERO.to_string(), "0j");
    }

    #[test]
    fn negative_zero_real_part_stays_purely_imaginary() {
        assert_eq!((-ComplexNumber::new(0.0, 4.0)).to_string(), "-4j");
        assert_eq!(ComplexNumber::new(-0.0, 2.5).to_string(), "2.5j");
    }

    #[test]
    fn powi_handles_negative_exponents() {
        let expr = Expr::variable("z");
        let half = ComplexNumber::new(2.0, 0.0).checked_powi(-1, &expr).unwrap();
        assert_eq!(half, Value::Complex(ComplexNumber::new(0.5, 0.0)));

        let err = ZERO.checked_powi(-2, &expr).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    }
}
