/// The evaluator module computes values from AST nodes.
///
/// The evaluator walks the tree bottom-up, applies the numeric semantics of
/// every operator and builtin function, resolves variables against the
/// caller's environment, and reports runtime errors tied to the failing
/// sub-expression.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Looks up variables in a read-only environment.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes preprocessed queries.
///
/// The lexer reads the rewritten query text and produces a stream of tokens,
/// each paired with its byte offset. Numeric literals are classified into
/// integers, reals and imaginary numbers here.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Rejects characters that belong to no token.
/// - Rejects integer literals that do not fit in 64 bits.
pub mod lexer;
/// Parsing of standalone numeric text, as used for command-line bindings.
pub mod number;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. Besides plain structure it performs two rewrites: a trailing
/// percent operand in a sum becomes "percent of the base", and chains of the
/// parallel operator are flattened into one node.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with byte positions.
pub mod parser;
/// Textual rewrites applied to a raw query before tokenizing.
///
/// Turns calculator shorthand (`5!`, `2x`, `^`, `4k`) into plain expression
/// syntax so the lexer and parser stay small.
pub mod preprocessor;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the complex number type.
/// - Provides safe promotion between numeric types (e.g., integer to real).
pub mod value;
