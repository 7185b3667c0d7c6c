/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// preprocessed query. Parse errors include unrecognized characters,
/// unbalanced parentheses, missing operands and literals that cannot be
/// represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree, such as unknown names, wrong argument counts, domain violations and
/// integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The closed set of error categories reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token stream: unmatched parentheses, trailing or missing
    /// tokens.
    Syntax,
    /// A character the tokenizer does not recognize.
    Tokenize,
    /// An unresolved variable or function name.
    Name,
    /// A function called with the wrong number of arguments.
    Arity,
    /// An argument outside a function's or operator's domain.
    Domain,
    /// A result or literal outside the representable range.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "SyntaxError",
            Self::Tokenize => "TokenizeError",
            Self::Name => "NameError",
            Self::Arity => "ArityError",
            Self::Domain => "DomainError",
            Self::Overflow => "OverflowError",
        };
        write!(f, "{name}")
    }
}

/// Any error produced by the evaluation pipeline.
#[derive(Debug)]
pub enum Error {
    /// The query could not be tokenized or parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use engcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("foo + 1", &HashMap::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{}: {e}", e.kind()),
            Self::Runtime(e) => write!(f, "{}: {e}", e.kind()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
