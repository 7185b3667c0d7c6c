use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A number directly followed (possibly after spaces) by `x` or `pi`.
    static ref IMPLIED_MULTIPLICATION: Regex = Regex::new(
        r"((?:\.\d+|\b\d+\.\d*|\b\d+)(?:[eE][-+]?\d+)?)\s*(x|pi)\b"
    ).unwrap();

    /// A digit followed by an SI magnitude suffix.
    static ref ENGINEERING_SUFFIX: Regex = Regex::new(
        r"\d([fpnumkMG])"
    ).unwrap();
}

/// Rewrites calculator shorthand into plain expression syntax.
///
/// The passes run in a fixed order, each assuming the previous ones are done:
/// 1. postfix factorial (`5!`, `(2+3)!`, `sin(x)!`) becomes a call to
///    `factorial`;
/// 2. `^` becomes `**`, then `xor` (and `^^`) becomes `^`;
/// 3. a number directly followed by `x` or `pi` becomes an explicit product;
/// 4. engineering suffixes (`4k`, `3.4n`) become exponents.
///
/// The rewrite never fails; malformed input is left for the tokenizer and
/// parser to reject.
///
/// # Example
/// ```
/// use engcalc::interpreter::preprocessor::preprocess;
///
/// assert_eq!(preprocess("sin(2*pi*4k)! + 3M + 5//6"),
///            "factorial(sin(2*pi*4e+3)) + 3e+6 + 5//6");
/// ```
#[must_use]
pub fn preprocess(query: &str) -> String {
    let query = rewrite_factorials(query);
    tracing::trace!(%query, "factorials rewritten");
    let query = rewrite_pow_xor(&query);
    tracing::trace!(%query, "power and xor rewritten");
    let query = rewrite_implied_multiplication(&query);
    tracing::trace!(%query, "implied multiplication rewritten");
    let query = rewrite_engineering_notation(&query);
    tracing::trace!(%query, "engineering notation rewritten");
    query
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Start of the identifier that ends `output`, ignoring trailing
/// whitespace. Numbers are not identifiers.
fn identifier_start(output: &str) -> Option<usize> {
    let trimmed = output.trim_end();
    let start = trimmed.char_indices()
                       .rev()
                       .take_while(|&(_, c)| is_word_char(c))
                       .last()
                       .map(|(index, _)| index)?;
    trimmed[start..].starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
                    .then_some(start)
}

/// Rewrites every postfix `!` into a call to `factorial` in one pass.
///
/// `atom` tracks where the operand that ends at the current output position
/// starts: a number or identifier, a parenthesized group, or a call
/// `name(...)`. A `!` wraps that operand; a `!` with no operand directly in
/// front of it (`5 !`) is left alone.
fn rewrite_factorials(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    let mut output = String::with_capacity(query.len());
    let mut groups: Vec<usize> = Vec::new();
    let mut atom: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_word_char(c) {
            let start = output.len();
            let numeric = c.is_ascii_digit() || c == '.';
            while i < chars.len() && is_word_char(chars[i]) {
                output.push(chars[i]);
                i += 1;
                // Keep the sign of an exponent (`1e-3`) inside the number.
                if numeric
                   && matches!(chars[i - 1], 'e' | 'E')
                   && matches!(chars.get(i), Some('+' | '-'))
                   && chars.get(i + 1).is_some_and(char::is_ascii_digit)
                {
                    output.push(chars[i]);
                    i += 1;
                }
            }
            atom = Some(start);
            continue;
        }

        match c {
            '(' => {
                let start = identifier_start(&output).unwrap_or(output.len());
                groups.push(start);
                output.push(c);
                atom = None;
            },
            ')' => {
                output.push(c);
                atom = groups.pop();
            },
            '!' => match atom {
                Some(start) if output[start..].starts_with('(') => {
                    output.insert_str(start, "factorial");
                },
                Some(start) => {
                    output.insert_str(start, "factorial(");
                    output.push(')');
                },
                None => output.push(c),
            },
            _ => {
                output.push(c);
                atom = None;
            },
        }
        i += 1;
    }

    output
}

/// `^` is the power operator; `xor` and `^^` spell bitwise exclusive or.
fn rewrite_pow_xor(query: &str) -> String {
    query.replace("^^", " xor ")
         .replace('^', "**")
         .replace("xor", "^")
}

fn rewrite_implied_multiplication(query: &str) -> String {
    IMPLIED_MULTIPLICATION.replace_all(query, "(${1}*${2})")
                          .into_owned()
}

/// The exponent an engineering suffix stands for.
fn suffix_exponent(suffix: &str) -> Option<&'static str> {
    match suffix {
        "f" => Some("e-15"),
        "p" => Some("e-12"),
        "n" => Some("e-9"),
        "u" => Some("e-6"),
        "m" => Some("e-3"),
        "k" => Some("e+3"),
        "M" => Some("e+6"),
        "G" => Some("e+9"),
        _ => None,
    }
}

/// Expands `4k` into `4e+3`. A suffix directly followed by another digit is
/// not a magnitude (`1m5`) and stays as written.
fn rewrite_engineering_notation(query: &str) -> String {
    let mut output = String::with_capacity(query.len() + 8);
    let mut copied = 0;

    for captures in ENGINEERING_SUFFIX.captures_iter(query) {
        let Some((suffix, exponent)) = suffix_match(&captures) else {
            continue;
        };
        if query[suffix.end()..].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        output.push_str(&query[copied..suffix.start()]);
        output.push_str(exponent);
        copied = suffix.end();
    }

    output.push_str(&query[copied..]);
    output
}

fn suffix_match<'h>(captures: &Captures<'h>) -> Option<(regex::Match<'h>, &'static str)> {
    let suffix = captures.get(1)?;
    Some((suffix, suffix_exponent(suffix.as_str())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_of_numbers_and_names() {
        assert_eq!(rewrite_factorials("5!"), "factorial(5)");
        assert_eq!(rewrite_factorials("x!"), "factorial(x)");
        assert_eq!(rewrite_factorials("2.5e-3!"), "factorial(2.5e-3)");
        assert_eq!(rewrite_factorials("5!!"), "factorial(factorial(5))");
        assert_eq!(rewrite_factorials("5 !"), "5 !");
    }

    #[test]
    fn factorial_of_groups_unwraps_the_parentheses() {
        assert_eq!(rewrite_factorials("(2+3)!"), "factorial(2+3)");
        assert_eq!(rewrite_factorials("((3)!)!"), "factorial(factorial(3))");
        assert_eq!(rewrite_factorials("2*(1+(2))! + 1"), "2*factorial(1+(2)) + 1");
    }

    #[test]
    fn factorial_of_calls_wraps_the_whole_call() {
        assert_eq!(rewrite_factorials("sin(2*pi*4k)! + 3M"),
                   "factorial(sin(2*pi*4k)) + 3M");
        assert_eq!(rewrite_factorials("sin (x)!"), "factorial(sin (x))");
        assert_eq!(rewrite_factorials("2 (3)!"), "2 factorial(3)");
    }

    #[test]
    fn caret_is_power_and_xor_is_caret() {
        assert_eq!(rewrite_pow_xor("2^3"), "2**3");
        assert_eq!(rewrite_pow_xor("6 xor 3"), "6 ^ 3");
        assert_eq!(rewrite_pow_xor("5^^1"), "5 ^ 1");
    }

    #[test]
    fn implied_multiplication_only_for_whole_words() {
        assert_eq!(rewrite_implied_multiplication("2x"), "(2*x)");
        assert_eq!(rewrite_implied_multiplication("2pi"), "(2*pi)");
        assert_eq!(rewrite_implied_multiplication("3.5 x"), "(3.5*x)");
        assert_eq!(rewrite_implied_multiplication("2xy"), "2xy");
        assert_eq!(rewrite_implied_multiplication("x2"), "x2");
        assert_eq!(rewrite_implied_multiplication("2pix"), "2pix");
    }

    #[test]
    fn engineering_suffixes_expand() {
        assert_eq!(rewrite_engineering_notation("1k"), "1e+3");
        assert_eq!(rewrite_engineering_notation("2.5M"), "2.5e+6");
        assert_eq!(rewrite_engineering_notation("3.4n"), "3.4e-9");
        assert_eq!(rewrite_engineering_notation("4u+2p"), "4e-6+2e-12");
        assert_eq!(rewrite_engineering_notation("7f*1G"), "7e-15*1e+9");
    }

    #[test]
    fn engineering_suffix_followed_by_digit_is_kept() {
        assert_eq!(rewrite_engineering_notation("1m5"), "1m5");
        assert_eq!(rewrite_engineering_notation("1m5 + 2m"), "1m5 + 2e-3");
    }

    #[test]
    fn passes_compose_in_order() {
        assert_eq!(preprocess("sin(2*pi*4k)! + 3M + 5//6"),
                   "factorial(sin(2*pi*4e+3)) + 3e+6 + 5//6");
        assert_eq!(preprocess("2^3!"), "2**factorial(3)");
        assert_eq!(preprocess("   "), "   ");
    }
}
