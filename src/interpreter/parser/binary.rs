use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Operand, ParseResult},
            unary::{parse_postfix, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. When the right
/// operand is a bare percent term the sum is rewritten relative to its base:
/// `L + p%` becomes `L * (1 + p%)`. Inside a longer chain the base is only
/// the nearest left operand, so `3 + 11 + 2%` becomes `3 + 11 * (1 + 2%)`.
///
/// The rule is: `additive := bitwise (("+" | "-") bitwise)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_bitwise(tokens)?.expr;
    let mut chained = false;

    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_bitwise(tokens)?;
            if right.is_percent {
                left = apply_percent_of_base(left, op, right.expr, chained);
            } else {
                left = Expr::binary(left, op, right.expr);
                chained = true;
            }
            continue;
        }
        break;
    }

    Ok(left)
}

/// `base * (1 op percent)`.
fn percent_of_base(base: Expr, op: BinaryOperator, percent: Expr) -> Expr {
    Expr::binary(base,
                 BinaryOperator::Mul,
                 Expr::binary(Expr::literal(1), op, percent))
}

/// Applies the percent-of-base rewrite to the nearest left operand.
///
/// In a chain (`a + b + p%`) the left side is already `a + b`; only `b` is
/// the base, so the rewrite descends into its right child.
fn apply_percent_of_base(left: Expr,
                         op: BinaryOperator,
                         percent: Expr,
                         chained: bool)
                         -> Expr {
    match left {
        Expr::BinaryOp { left: outer,
                         op: outer_op,
                         right, } if chained => {
            Expr::BinaryOp { left:  outer,
                             op:    outer_op,
                             right: Box::new(percent_of_base(*right, op, percent)), }
        },
        base => percent_of_base(base, op, percent),
    }
}

/// Parses bitwise expressions.
///
/// Handles left-associative `&` and `^` (exclusive or, spelled `xor` by
/// users). These bind tighter than addition, so `1 + 5 & 1` is
/// `1 + (5 & 1)`.
///
/// The rule is: `bitwise := multiplicative (("&" | "^") multiplicative)*`
pub(in crate::interpreter::parser) fn parse_bitwise<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::BitAnd | BinaryOperator::BitXor)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Operand::plain(Expr::binary(left.expr, op, right.expr));
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*`, `/` and `%` (modulo), plus the parallel
/// operator `//`. Consecutive `//` operators are collected into a single
/// `Expr::Parallel` node instead of nesting pairwise; any other operator in
/// between ends the chain.
///
/// A percent term on the right of `*` or `/` is a plain fraction: `L * 2%`
/// is `L * 0.02`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%" | "//") exponent)*`
pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    let mut parallel_chain = false;

    loop {
        if let Some((Token::DoubleSlash, _)) = tokens.peek() {
            tokens.next();
            let right = parse_unary(tokens)?.expr;
            let expr = match left.expr {
                Expr::Parallel { mut operands } if parallel_chain => {
                    operands.push(right);
                    Expr::Parallel { operands }
                },
                other => Expr::Parallel { operands: vec![other, right] },
            };
            left = Operand::plain(expr);
            parallel_chain = true;
            continue;
        }
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Operand::plain(Expr::binary(left.expr, op, right.expr));
            parallel_chain = false;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative, `a ** b ** c` parses as
/// `a ** (b ** c)`, and its right operand may carry a sign: `2 ** -1`.
///
/// The rule is: `exponent := postfix ("**" unary)?`
pub(in crate::interpreter::parser) fn parse_exponent<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens)?;
    if let Some((Token::DoubleStar, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Operand::plain(Expr::binary(base.expr, BinaryOperator::Pow, exponent.expr)));
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `**`, `&`, `^`). Returns `None` for all other
/// tokens, including `//`, which builds a parallel chain instead.
///
/// # Example
/// ```
/// use engcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::BitXor));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Caret => Some(BinaryOperator::BitXor),
        _ => None,
    }
}
