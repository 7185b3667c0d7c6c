use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed operand together with whether it is a bare percent term.
///
/// Only the additive level cares about the flag: `L + p%` is rewritten into
/// `L * (1 + p%)`. Any operator or grouping around the percent clears it.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Operand {
    pub expr:       Expr,
    pub is_percent: bool,
}

impl Operand {
    pub(in crate::interpreter::parser) const fn plain(expr: Expr) -> Self {
        Self { expr,
               is_percent: false }
    }
}

/// Parses a complete token stream into a single expression.
///
/// Every token must be consumed; anything left over after a complete
/// expression is an error.
///
/// # Errors
/// - `UnmatchedClosingParen` if the leftover token is `)`.
/// - `UnexpectedTrailingTokens` for any other leftover token.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use engcalc::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("1 + 5 & 1").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (5 & 1))");
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None => Ok(expr),
        Some((Token::RParen, position)) => {
            Err(ParseError::UnmatchedClosingParen { position: *position })
        },
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                       position: *position, })
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
