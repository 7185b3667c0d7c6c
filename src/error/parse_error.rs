use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are byte offsets into the preprocessed query.
pub enum ParseError {
    /// Found a character the tokenizer does not recognize.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts.
        position:  usize,
    },
    /// A numeric literal does not fit the representable range.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand or delimiter was still
    /// expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the unmatched opening parenthesis starts.
        position: usize,
    },
    /// A closing parenthesis `)` without a matching opening one.
    UnmatchedClosingParen {
        /// Where the parenthesis starts.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Text handed to `parse_number` is not a single numeric literal.
    InvalidNumber {
        /// The rejected text.
        text: String,
    },
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. } => ErrorKind::Tokenize,
            Self::LiteralTooLarge { .. } => ErrorKind::Overflow,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput
            | Self::ExpectedClosingParen { .. }
            | Self::UnmatchedClosingParen { .. }
            | Self::UnexpectedTrailingTokens { .. }
            | Self::InvalidNumber { .. } => ErrorKind::Syntax,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Unrecognized character '{character}' at position {position}.")
            },
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Literal '{literal}' at position {position} is too large."),
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Expected closing parenthesis ')' for the '(' at position {position} but none found."),
            Self::UnmatchedClosingParen { position } => write!(f,
                                                               "Closing parenthesis ')' at position {position} has no matching '('."),
            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Extra tokens after expression, starting with '{token}' at position {position}."),
            Self::InvalidNumber { text } => write!(f, "'{text}' is not a number."),
        }
    }
}

impl std::error::Error for ParseError {}
