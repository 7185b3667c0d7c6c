use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::ParseResult,
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::i64_to_f64,
};

/// Parses standalone numeric text with the same literal rules as queries.
///
/// Accepted forms, with optional surrounding whitespace:
/// - a signed or unsigned integer, real or imaginary literal (`42`, `-1.5e3`,
///   `4j`);
/// - a complex number `a+bj` or `a-bj`, optionally wrapped in one pair of
///   parentheses, the way complex results are rendered (`(1.0-2.0j)`).
///
/// # Errors
/// - `InvalidNumber` for anything else, including whole expressions.
/// - `LiteralTooLarge` for an integer literal that does not fit `i64`.
///
/// # Example
/// ```
/// use engcalc::{
///     interpreter::{
///         number::parse_number,
///         value::{complex::ComplexNumber, core::Value},
///     },
/// };
///
/// assert_eq!(parse_number("42").unwrap(), Value::Integer(42));
/// assert_eq!(parse_number(" -2.5 ").unwrap(), Value::Real(-2.5));
/// assert_eq!(parse_number("(1-2j)").unwrap(),
///            Value::Complex(ComplexNumber::new(1.0, -2.0)));
/// assert!(parse_number("1+2").is_err());
/// ```
pub fn parse_number(text: &str) -> ParseResult<Value> {
    let invalid = || ParseError::InvalidNumber { text: text.to_string() };

    let trimmed = text.trim();
    let inner = trimmed.strip_prefix('(')
                       .and_then(|rest| rest.strip_suffix(')'))
                       .unwrap_or(trimmed);

    // A signed integer is read whole so that `i64::MIN` fits.
    if let Ok(n) = inner.parse::<i64>() {
        return Ok(Value::Integer(n));
    }

    let tokens = match tokenize(inner) {
        Ok(tokens) => tokens,
        Err(e @ ParseError::LiteralTooLarge { .. }) => return Err(e),
        Err(_) => return Err(invalid()),
    };
    let tokens = tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>();

    let (negative, rest) = match tokens.as_slice() {
        [Token::Minus, rest @ ..] => (true, rest),
        [Token::Plus, rest @ ..] => (false, rest),
        rest => (false, rest),
    };
    let sign = if negative { -1.0 } else { 1.0 };

    match rest {
        [Token::Integer(n)] if negative => Ok(Value::Integer(-n)),
        [Token::Integer(n)] => Ok(Value::Integer(*n)),
        [Token::Real(r)] => Ok(Value::Real(sign * r)),
        [Token::Imaginary(i)] => Ok(Value::Complex(ComplexNumber::new(0.0, sign * i))),
        [real, op @ (Token::Plus | Token::Minus), Token::Imaginary(i)] => {
            let real = match real {
                Token::Integer(n) => i64_to_f64(*n),
                Token::Real(r) => *r,
                _ => return Err(invalid()),
            };
            let imaginary = if *op == Token::Minus { -i } else { *i };
            Ok(Value::Complex(ComplexNumber::new(sign * real, imaginary)))
        },
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;
    use crate::{
        error::ParseError,
        interpreter::value::{complex::ComplexNumber, core::Value},
    };

    #[test]
    fn plain_literals() {
        assert_eq!(parse_number("7").unwrap(), Value::Integer(7));
        assert_eq!(parse_number("-7").unwrap(), Value::Integer(-7));
        assert_eq!(parse_number("+1e3").unwrap(), Value::Real(1000.0));
        assert_eq!(parse_number("-4j").unwrap(),
                   Value::Complex(ComplexNumber::new(0.0, -4.0)));
    }

    #[test]
    fn rendered_complex_results_parse_back() {
        let value = Value::Complex(ComplexNumber::new(-1.5, 2.0));
        assert_eq!(parse_number(&value.to_string()).unwrap(), value);
        assert_eq!(parse_number("-1.5+2j").unwrap(), value);
    }

    #[test]
    fn expressions_are_not_numbers() {
        for text in ["", "x", "1+2", "2*3", "(1", "1 2", "4j+1", "$"] {
            assert_eq!(parse_number(text),
                       Err(ParseError::InvalidNumber { text: text.to_string() }),
                       "{text}");
        }
    }

    #[test]
    fn oversized_integers_overflow() {
        assert!(matches!(parse_number("99999999999999999999"),
                         Err(ParseError::LiteralTooLarge { .. })));
        assert!(matches!(parse_number("-9223372036854775809"),
                         Err(ParseError::LiteralTooLarge { .. })));
    }

    #[test]
    fn integer_bounds_are_numbers() {
        assert_eq!(parse_number("-9223372036854775808").unwrap(), Value::Integer(i64::MIN));
        assert_eq!(parse_number("9223372036854775807").unwrap(), Value::Integer(i64::MAX));
    }
}
