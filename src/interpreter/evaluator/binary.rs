/// Dispatch of binary operators to their implementations.
pub mod core;

/// Addition, subtraction, multiplication, true division and floor modulo.
pub mod scalar;

/// Exponentiation over integers, reals and complex numbers.
pub mod power;

/// Bitwise AND and XOR.
pub mod bitwise;

/// The n-ary parallel combination `a // b // ...`.
pub mod parallel;
