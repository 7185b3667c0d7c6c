/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, written with a `j` suffix in queries. Includes implementations for
/// the basic arithmetic operators and the elementary functions the function
/// table exposes for complex arguments.
pub mod complex;

/// The tagged result type of an evaluation.
///
/// Defines `Value` together with its promotion rules and its display form.
pub mod core;
