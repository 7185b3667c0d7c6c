//! # engcalc
//!
//! engcalc is an engineering calculator expression language written in Rust.
//! It turns a human-typed query such as `sin(2*pi*4k)! + 3M + 5//6` into a
//! numeric result plus a canonical, fully parenthesized rendering of what was
//! computed.
//!
//! A query goes through four stages: textual preprocessing (postfix `!`,
//! `^`, implied multiplication and SI suffixes), tokenizing, parsing into an
//! [`ast::Expr`], and evaluation against a caller-supplied
//! [`Environment`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::Environment,
        number::parse_number,
        value::{complex::ComplexNumber, core::Value},
    },
};
use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::core::parse_tokens,
        preprocessor::preprocess,
    },
};

/// Defines the structure of parsed queries.
///
/// This module declares the `Expr` enum and related types that represent a
/// query as a tree. The AST is built by the parser, traversed by the
/// evaluator, and rendered back to canonical text through `Display`.
///
/// # Responsibilities
/// - Defines expression node and operator types.
/// - Renders trees in the canonical, re-parseable form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating a query, and classifies them into a small set of
/// error kinds.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, evaluator).
/// - Attaches byte positions or the failing sub-expression for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of query evaluation.
///
/// This module ties together preprocessing, lexing, parsing, evaluation and
/// value representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32` and `f64` without silent data loss.
pub mod util;

/// Preprocesses, tokenizes and parses a query into an expression tree.
///
/// # Examples
/// ```
/// use engcalc::parse;
///
/// let expr = parse("11+2%").unwrap();
/// assert_eq!(expr.to_string(), "(11 * (1 + (2%)))");
///
/// // The canonical rendering parses back to the same tree.
/// assert_eq!(parse(&expr.to_string()).unwrap(), expr);
/// ```
pub fn parse(query: &str) -> Result<Expr, Error> {
    let source = preprocess(query);
    debug!(query, preprocessed = %source, "preprocessed query");

    let tokens = tokenize(&source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Evaluates a query against an environment of variable bindings.
///
/// Returns the value together with the canonical rendering of the parsed
/// expression. The environment is only read. An empty or whitespace-only
/// query evaluates to empty text.
///
/// # Errors
/// Returns an error if the query cannot be tokenized or parsed, or if
/// evaluation fails. [`Error::kind`] tells the failure categories apart.
///
/// # Examples
/// ```
/// use engcalc::{Environment, ErrorKind, Value, evaluate};
///
/// let mut environment = Environment::new();
/// environment.insert("a".to_string(), Value::Integer(5));
/// environment.insert("b".to_string(), Value::Integer(2));
///
/// let (value, canonical) = evaluate("a+b", &environment).unwrap();
/// assert_eq!(value, Value::Integer(7));
/// assert_eq!(canonical, "(a + b)");
///
/// let err = evaluate("c", &environment).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Name);
/// ```
pub fn evaluate(query: &str, environment: &Environment) -> Result<(Value, String), Error> {
    if query.trim().is_empty() {
        return Ok((Value::Text(String::new()), String::new()));
    }

    let expr = parse(query).inspect_err(|e| debug!(error = %e, "query rejected"))?;
    let canonical = expr.to_string();

    let value = Context::new(environment).eval(&expr).inspect_err(|e| {
                                                         debug!(%canonical, error = %e, "evaluation failed");
                                                     })?;
    debug!(%canonical, %value, "evaluated query");

    Ok((value, canonical))
}
