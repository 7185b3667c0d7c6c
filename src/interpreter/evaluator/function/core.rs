use std::fmt;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, conj, factorial, integer, log, min_max, rounding, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the call node
/// for error reporting.
type BuiltinFn = fn(&[Value], &Expr) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with `n` required arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"      => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"      => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "atan2"     => { arity: Arity::Exact(2), func: builtin::atan2 },
    "sinh"      => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"      => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"      => { arity: Arity::Exact(1), func: builtin::tanh },
    "asinh"     => { arity: Arity::Exact(1), func: builtin::asinh },
    "acosh"     => { arity: Arity::Exact(1), func: builtin::acosh },
    "atanh"     => { arity: Arity::Exact(1), func: builtin::atanh },
    "exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "ln"        => { arity: Arity::Exact(1), func: log::ln },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10"     => { arity: Arity::Exact(1), func: log::log10 },
    "log2"      => { arity: Arity::Exact(1), func: log::log2 },
    "sqrt"      => { arity: Arity::OneOf(&[1, 2]), func: sqrt::sqrt },
    "sqr"       => { arity: Arity::Exact(1), func: builtin::sqr },
    "pow"       => { arity: Arity::OneOf(&[2, 3]), func: integer::pow },
    "hypot"     => { arity: Arity::Exact(2), func: builtin::hypot },
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "sign"      => { arity: Arity::Exact(1), func: builtin::sign },
    "floor"     => { arity: Arity::Exact(1), func: |args, expr| rounding::unary_round("floor", args, expr) },
    "ceil"      => { arity: Arity::Exact(1), func: |args, expr| rounding::unary_round("ceil", args, expr) },
    "trunc"     => { arity: Arity::Exact(1), func: |args, expr| rounding::unary_round("trunc", args, expr) },
    "round"     => { arity: Arity::OneOf(&[1, 2]), func: rounding::round },
    "factorial" => { arity: Arity::Exact(1), func: factorial::factorial },
    "gamma"     => { arity: Arity::Exact(1), func: builtin::gamma },
    "gcd"       => { arity: Arity::Exact(2), func: integer::gcd },
    "binom"     => { arity: Arity::Exact(2), func: integer::binom },
    "comb"      => { arity: Arity::Exact(2), func: integer::binom },
    "min"       => { arity: Arity::AtLeast(1), func: |args, expr| min_max::min_max("min", args, expr) },
    "max"       => { arity: Arity::AtLeast(1), func: |args, expr| min_max::min_max("max", args, expr) },
    "degrees"   => { arity: Arity::Exact(1), func: builtin::degrees },
    "radians"   => { arity: Arity::Exact(1), func: builtin::radians },
    "conj"      => { arity: Arity::Exact(1), func: conj::conj },
    "pi"        => { arity: Arity::Exact(0), func: |_, _| Ok(Value::Real(std::f64::consts::PI)) },
    "e"         => { arity: Arity::Exact(0), func: |_, _| Ok(Value::Real(std::f64::consts::E)) },
    "tau"       => { arity: Arity::Exact(0), func: |_, _| Ok(Value::Real(std::f64::consts::TAU)) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(m) => write!(f, "{m}"),
            Self::OneOf(arr) => {
                let options = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", options.join(" or "))
            },
            Self::AtLeast(m) => write!(f, "at least {m}"),
        }
    }
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The name is looked up in the builtin table and the argument count is
    /// checked before any argument is evaluated. Arguments are then evaluated
    /// left to right and passed to the builtin.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `expr`: The call node, for error reporting.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is not a builtin.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - Any error raised by an argument or by the builtin itself.
    ///
    /// # Example
    /// ```
    /// use engcalc::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         evaluator::core::{Context, Environment},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let environment = Environment::new();
    /// let context = Context::new(&environment);
    ///
    /// let arguments = [Expr::literal(-3)];
    /// let call = Expr::FunctionCall { name:      "abs".to_string(),
    ///                                 arguments: arguments.to_vec(), };
    /// let result = context.eval_function_call("abs", &arguments, &call).unwrap();
    /// assert_eq!(result, Value::Integer(3));
    /// ```
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              expr: &Expr)
                              -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if !builtin.arity.check(arguments.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: builtin.arity.to_string(),
                                                             found:    arguments.len(), });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        (builtin.func)(&values, expr)
    }
}

#[cfg(test)]
mod tests {
    use super::{Arity, BUILTIN_FUNCTIONS};

    #[test]
    fn arity_renders_for_error_messages() {
        assert_eq!(Arity::Exact(1).to_string(), "1");
        assert_eq!(Arity::OneOf(&[1, 2]).to_string(), "1 or 2");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names = BUILTIN_FUNCTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_FUNCTIONS.len());
    }
}
