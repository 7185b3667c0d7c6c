/// Parser entry points and shared types.
///
/// Defines the `ParseResult` alias, the top-level `parse_tokens` and
/// `parse_expression` functions, and the operand wrapper threaded through the
/// precedence levels.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: additive (with the percent-of-base
/// rewrite), bitwise, multiplicative (with parallel chain flattening) and
/// exponentiation.
pub mod binary;

/// Unary, postfix and primary expression parsing.
///
/// Handles prefix signs, the postfix percent, literals, groupings, constants,
/// variables and function calls.
pub mod unary;

/// Parser helpers.
///
/// Reusable routines such as comma-separated argument lists.
pub mod utils;
