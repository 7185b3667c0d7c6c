use std::fmt;

use crate::interpreter::value::complex::ComplexNumber;

/// Represents a literal value in an expression.
///
/// Literals are the numeric constants that appear in a query after
/// preprocessing, plus the folded constants `pi`, `e` and `tau`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A complex literal, written with a `j` suffix.
    Complex(ComplexNumber),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

/// Renders a literal so that tokenizing the text yields the same value.
///
/// Reals use the shortest round-trip form and always carry a decimal point
/// or exponent, which keeps them distinct from integers.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Complex(c) if c.real == 0.0 => write!(f, "{:?}j", c.imaginary),
            Self::Complex(c) if c.imaginary < 0.0 => {
                write!(f, "({:?} - {:?}j)", c.real, -c.imaginary)
            },
            Self::Complex(c) => write!(f, "({:?} + {:?}j)", c.real, c.imaginary),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children; the tree has no sharing and no cycles. Nodes
/// carry no source positions, so two parses of equivalent text compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable, resolved against the environment at
    /// evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation: negation, factorial or percent.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A chain `a // b // ...` of the parallel operator, flattened into one
    /// node. Always holds at least two operands.
    Parallel {
        /// The chained operands, in source order.
        operands: Vec<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a variable reference.
    ///
    /// ## Example
    /// ```
    /// use engcalc::ast::Expr;
    ///
    /// let expr = Expr::variable("x");
    /// assert_eq!(expr.to_string(), "x");
    /// ```
    #[must_use]
    pub fn variable(name: &str) -> Self {
        Self::Variable { name: name.to_string() }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary node.
    ///
    /// ## Example
    /// ```
    /// use engcalc::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::literal(2), BinaryOperator::Add, Expr::literal(3));
    /// assert_eq!(sum.to_string(), "(2 + 3)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// The canonical rendering: every compound sub-expression is parenthesized.
///
/// Preprocessing, tokenizing and parsing the rendering yields a tree equal to
/// the rendered one.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => write!(f, "(-{expr})"),
            Self::UnaryOp { op: UnaryOperator::Percent,
                            expr, } => write!(f, "({expr}%)"),
            Self::UnaryOp { op: UnaryOperator::Factorial,
                            expr, } => write!(f, "factorial({expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Parallel { operands } => {
                write!(f, "(")?;
                for (index, operand) in operands.iter().enumerate() {
                    if index > 0 {
                        write!(f, " // ")?;
                    }
                    write!(f, "{operand}")?;
                }
                write!(f, ")")
            },
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor modulo (`%` between two operands)
    Mod,
    /// Exponentiation (`**`, written `^` by users)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`xor`, lowered to `^` before tokenizing)
    BitXor,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Factorial (e.g. `5!`, written `factorial(5)` after preprocessing).
    Factorial,
    /// Postfix percent (e.g. `2%`), the operand divided by one hundred.
    Percent,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, BitAnd, BitXor, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            // `^` would be read back as a power.
            BitXor => "xor",
        };
        write!(f, "{operator}")
    }
}
