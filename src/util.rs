/// Numeric conversion helpers.
///
/// This module provides checked functions for converting between integer and
/// floating-point types. Conversions that could silently lose information
/// (a fractional real used as an integer, an exponent too large for `u32`)
/// return a `RuntimeError` tied to the expression being evaluated.
pub mod num;
