//! Evaluator for infix arithmetic expressions such as `3 * (4 + 3)`.
//!
//! Input goes through three independent stages: the lexer turns the string into
//! tokens, a recursive-descent parser builds an expression tree, and the evaluator
//! reduces the tree to an `f64`. Each call owns its tokens and tree, so calls never
//! share state.

mod ast;
mod config;
mod error;
mod eval;
mod lex;
mod parse;
mod span;
mod token;

use log::debug;

pub use config::{ConfigError, Options, MAX_DEPTH_VAR};
pub use error::{EvalError, ExpressionError, ParseError, TokenError};
pub use parse::DEFAULT_MAX_DEPTH;
pub use span::Span;
pub use token::Token;

/// Evaluates `input` with the default [`Options`].
///
/// ```
/// assert_eq!(expr_eval::evaluate_expression("3 * (4 + 3)"), Ok(21.0));
/// ```
pub fn evaluate_expression(input: &str) -> Result<f64, ExpressionError> {
    evaluate_expression_with(input, &Options::default())
}

pub fn evaluate_expression_with(input: &str, options: &Options) -> Result<f64, ExpressionError> {
    let tokens = lex::lex(input)?;
    debug!("lexed {} tokens", tokens.len());

    let expr = parse::parse(&tokens, options.max_depth)?;
    debug!("parsed {:?}", input);

    let value = eval::evaluate(&expr)?;
    debug!("{:?} = {}", input, value);
    Ok(value)
}

/// Evaluates `input` and requires the result to be a whole number that fits in `i64`.
///
/// ```
/// assert_eq!(expr_eval::evaluate_integer("2 + (3 * 4)"), Ok(14));
/// ```
pub fn evaluate_integer(input: &str) -> Result<i64, ExpressionError> {
    let value = evaluate_expression(input)?;
    Ok(eval::to_integer(value)?)
}
