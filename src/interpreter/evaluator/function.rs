/// Built-in function implementations.
///
/// Contains the trigonometric, hyperbolic and exponential functions, angle
/// conversion, the simple numeric helpers and the named constants.
pub mod builtin;
/// The `conj` (complex conjugate) function implementation.
///
/// Computes the complex conjugate of a number.
pub mod conj;
/// Factorial of integers and integral reals.
pub mod factorial;
/// Integer helpers: `gcd`, `binom`/`comb` and three-argument `pow`.
pub mod integer;
/// Logarithm function implementations.
///
/// Supports natural, base-10, base-2 and arbitrary-base logarithms.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// `floor`, `ceil`, `trunc` and `round`.
pub mod rounding;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root, or the n-th root, for real, integer, or complex
/// values.
pub mod sqrt;

pub mod core;
