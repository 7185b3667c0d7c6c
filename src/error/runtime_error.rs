use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// `fragment` fields hold the canonical rendering of the sub-expression that
/// failed.
pub enum RuntimeError {
    /// Tried to use a variable that is not in the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The accepted argument counts, e.g. `1 or 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Attempted an exact division by zero.
    DivisionByZero {
        /// The failing sub-expression.
        fragment: String,
    },
    /// An argument was outside the domain of a function or operator.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// The failing sub-expression.
        fragment: String,
    },
    /// A value had a type the operation does not accept.
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// The failing sub-expression.
        fragment: String,
    },
    /// A result exceeded the representable range.
    Overflow {
        /// The failing sub-expression.
        fragment: String,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnknownFunction { .. } => ErrorKind::Name,
            Self::ArgumentCountMismatch { .. } => ErrorKind::Arity,
            Self::DivisionByZero { .. } | Self::InvalidArgument { .. } | Self::TypeError { .. } => {
                ErrorKind::Domain
            },
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Function '{name}' takes {expected} argument(s), but {found} were given."),
            Self::DivisionByZero { fragment } => write!(f, "Division by zero in {fragment}."),
            Self::InvalidArgument { details, fragment } => {
                write!(f, "Invalid argument in {fragment}: {details}.")
            },
            Self::TypeError { details, fragment } => {
                write!(f, "Type error in {fragment}: {details}.")
            },
            Self::Overflow { fragment } => {
                write!(f, "Result of {fragment} is out of range.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
