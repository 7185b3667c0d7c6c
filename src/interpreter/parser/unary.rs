use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{Operand, ParseResult, parse_expression},
            utils::{parse_comma_separated, starts_operand},
        },
        value::complex::ComplexNumber,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (no-op)
///
/// Unary operators are right-associative and bind looser than
/// exponentiation, so `-2 ** 2` is parsed as `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | exponent
/// ```
pub(in crate::interpreter::parser) fn parse_unary<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, _)) => {
            tokens.next();
            let operand = parse_unary(tokens)?;
            Ok(Operand::plain(Expr::unary(UnaryOperator::Negate, operand.expr)))
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens)
        },
        _ => parse_exponent(tokens),
    }
}

/// Parses a primary expression followed by any postfix percent signs.
///
/// A `%` is a postfix percent only when the token after it cannot start an
/// operand; otherwise it is left for the multiplicative level as modulo.
/// So `2%+3` is `(2%) + 3` while `7 % 3` is `7 mod 3`.
///
/// Grammar:
/// ```text
///     postfix := primary "%"*
/// ```
pub(in crate::interpreter::parser) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut operand = Operand::plain(parse_primary(tokens)?);

    while let Some((Token::Percent, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if lookahead.peek().is_some_and(|(token, _)| starts_operand(token)) {
            break;
        }
        tokens.next();
        operand = Operand { expr:       Expr::unary(UnaryOperator::Percent, operand.expr),
                            is_percent: true, };
    }

    Ok(operand)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream ends where an operand is needed.
/// - `UnexpectedToken` for any token that cannot start an operand.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Expr::literal(*n)),
        Some((Token::Real(r), _)) => Ok(Expr::literal(*r)),
        Some((Token::Imaginary(i), _)) => Ok(Expr::literal(ComplexNumber::new(0.0, *i))),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position),
        Some((Token::Identifier(name), _)) => parse_identifier_or_function(tokens, name),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// The opening parenthesis has already been consumed. Failure to find the
/// closing parenthesis yields `ParseError::ExpectedClosingParen` pointing at
/// the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// The value a named constant folds into.
fn constant_value(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

/// Parses an identifier, constant, or function call.
///
/// Supported forms:
///
/// - `name(arg1, arg2, ...)`: a function call; `factorial(x)` with exactly
///   one argument becomes the factorial operator node;
/// - `pi`, `e`, `tau`: folded into real literals;
/// - any other name: a variable reference, resolved at evaluation time.
///
/// # Errors
/// Returns a `ParseError` if function-call arguments fail to parse or the
/// closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let mut arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        if name == "factorial" && arguments.len() == 1
           && let Some(argument) = arguments.pop()
        {
            return Ok(Expr::unary(UnaryOperator::Factorial, argument));
        }
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments });
    }

    Ok(constant_value(name).map_or_else(|| Expr::variable(name), Expr::literal))
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr, UnaryOperator},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse_tokens},
    };

    fn parse(source: &str) -> Result<Expr, ParseError> {
        parse_tokens(&tokenize(source)?)
    }

    #[test]
    fn percent_or_modulo_depends_on_what_follows() {
        assert_eq!(parse("7 % 3").unwrap(),
                   Expr::binary(Expr::literal(7), BinaryOperator::Mod, Expr::literal(3)));
        assert_eq!(parse("2%").unwrap(),
                   Expr::unary(UnaryOperator::Percent, Expr::literal(2)));
        assert_eq!(parse("(2%)*3").unwrap().to_string(), "((2%) * 3)");
    }

    #[test]
    fn constants_fold_into_literals() {
        assert_eq!(parse("pi").unwrap(), Expr::literal(std::f64::consts::PI));
        assert_eq!(parse("pi()").unwrap(),
                   Expr::FunctionCall { name:      "pi".to_string(),
                                        arguments: vec![], });
    }

    #[test]
    fn factorial_call_with_one_argument_is_an_operator() {
        assert_eq!(parse("factorial(5)").unwrap(),
                   Expr::unary(UnaryOperator::Factorial, Expr::literal(5)));
        assert!(matches!(parse("factorial(5, 2)").unwrap(),
                         Expr::FunctionCall { .. }));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_eq!(parse("-2 ** 2").unwrap().to_string(), "(-(2 ** 2))");
        assert_eq!(parse("2 ** -1").unwrap().to_string(), "(2 ** (-1))");
        assert_eq!(parse("+3").unwrap(), Expr::literal(3));
    }

    #[test]
    fn malformed_input_reports_positions() {
        assert_eq!(parse("(2+3"), Err(ParseError::ExpectedClosingParen { position: 0 }));
        assert_eq!(parse("2+3)"), Err(ParseError::UnmatchedClosingParen { position: 3 }));
        assert_eq!(parse("2 +"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse("2 3"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                              position: 2, }));
        assert_eq!(parse("* 2"),
                   Err(ParseError::UnexpectedToken { token:    "*".to_string(),
                                                     position: 0, }));
    }
}
