/// Binary operator evaluation logic.
///
/// Handles arithmetic, floor modulo, exponentiation, the bitwise operators
/// and the n-ary parallel combination.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, postfix percent and factorial.
pub mod unary;

/// Core evaluation logic and context.
///
/// Contains the main dispatch over expression nodes and the read-only
/// evaluation context.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles the builtin function table, argument checking, and the builtin
/// implementations themselves.
pub mod function;
