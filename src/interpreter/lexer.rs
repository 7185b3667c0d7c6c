use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in a preprocessed query.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Imaginary literal tokens, such as `4j` or `2.5e3J`.
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?[jJ]", parse_imaginary)]
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[jJ]", parse_imaginary)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[jJ]", parse_imaginary)]
    Imaginary(f64),
    /// Identifier tokens; variable, constant or function names such as `x`
    /// or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `^`, bitwise exclusive or once the query is preprocessed.
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Imaginary(i) => write!(f, "{i}j"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::DoubleStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::DoubleSlash => write!(f, "//"),
            Self::Percent => write!(f, "%"),
            Self::Ampersand => write!(f, "&"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the literal overflows to infinity.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|r: &f64| r.is_finite())
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if successful.
/// - `None`: If the literal does not fit in 64 bits.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses the magnitude of an imaginary literal, dropping the `j` suffix.
fn parse_imaginary(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse()
                            .ok()
                            .filter(|i: &f64| i.is_finite())
}

/// Splits a preprocessed query into tokens paired with their byte offsets.
///
/// # Errors
/// - `LiteralTooLarge` for numeric literals that cannot be represented.
/// - `UnrecognizedCharacter` for text that starts no token.
///
/// # Example
/// ```
/// use engcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Identifier("x".to_string()), 5)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            if slice.contains(|c: char| c.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                         position });
            }
            return Err(ParseError::UnrecognizedCharacter { character: slice.chars()
                                                                           .next()
                                                                           .unwrap_or_default(),
                                                           position });
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn numbers_are_classified() {
        assert_eq!(kinds("42 3.5 .5 2. 1e3 4j 2.5e3J"),
                   vec![Token::Integer(42),
                        Token::Real(3.5),
                        Token::Real(0.5),
                        Token::Real(2.0),
                        Token::Real(1000.0),
                        Token::Imaginary(4.0),
                        Token::Imaginary(2500.0)]);
    }

    #[test]
    fn double_character_operators_win() {
        assert_eq!(kinds("2**3//4*5/6"),
                   vec![Token::Integer(2),
                        Token::DoubleStar,
                        Token::Integer(3),
                        Token::DoubleSlash,
                        Token::Integer(4),
                        Token::Star,
                        Token::Integer(5),
                        Token::Slash,
                        Token::Integer(6)]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("sin( 2 )").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, position)| *position).collect();
        assert_eq!(positions, vec![0, 3, 5, 7]);
    }

    #[test]
    fn unknown_character_is_reported() {
        assert_eq!(tokenize("2 $ 3"),
                   Err(ParseError::UnrecognizedCharacter { character: '$',
                                                           position:  2, }));
    }

    #[test]
    fn oversized_literals_are_rejected() {
        assert!(matches!(tokenize("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { position: 0, .. })));
        assert!(matches!(tokenize("1 + 1e999"),
                         Err(ParseError::LiteralTooLarge { position: 4, .. })));
    }
}
