//! # letcalc
//!
//! letcalc evaluates integer arithmetic written in fully parenthesised prefix
//! form, such as `add(1, mul(2, 3))`, with a `let(name, value, body)` form for
//! naming intermediate results.
//!
//! Input passes through four stages: the tokenizer, the arity validator, the
//! tree builder and the evaluator. Each stage reports its own kind of error;
//! see [`error::ErrorKind`].

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

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::{DEFAULT_MAX_DEPTH, parse},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent an
/// expression as a tree. The AST is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Gives operators exactly two operands and `let` a name, value and body.
/// - Renders trees back to source form for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and classifies them into the four
/// kinds a caller may need to tell apart.
///
/// # Responsibilities
/// - Defines error enums for the lexer, parser and evaluator.
/// - Carries character positions for lexical errors.
/// - Separates the arithmetic fault from malformed-input errors.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing and evaluation, and exposes
/// each stage for callers that need only part of the pipeline.
pub mod interpreter;

/// Settings for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// How many groups may be open at once before parsing fails.
    pub max_depth: usize,
    /// Print the token sequence and the tree to stderr.
    pub trace:     bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               trace:     false, }
    }
}

/// Evaluates one expression with default [`Options`].
///
/// # Errors
/// Returns an [`Error`] if the input cannot be tokenized or parsed, reads an
/// unbound variable, or divides by zero.
///
/// # Examples
/// ```
/// use letcalc::evaluate;
///
/// assert_eq!(evaluate("add(1, mul(2, 3))").unwrap(), 7);
/// assert_eq!(evaluate("let(a, 5, let(b, mul(a, 10), add(b, a)))").unwrap(), 55);
///
/// // 'b' is never bound.
/// assert!(evaluate("let(a, 1, add(a, b))").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i32, Error> {
    evaluate_with(source, &Options::default())
}

/// Evaluates one expression.
///
/// Every call gets its own tokens, tree and binding table; nothing carries
/// over between calls.
///
/// # Errors
/// Returns an [`Error`] if the input cannot be tokenized or parsed, reads an
/// unbound variable, or divides by zero.
///
/// # Examples
/// ```
/// use letcalc::{Options, evaluate_with, error::ErrorKind};
///
/// let options = Options { max_depth: 1,
///                         ..Options::default() };
///
/// assert_eq!(evaluate_with("sub(9, 4)", &options).unwrap(), 5);
///
/// let err = evaluate_with("sub(9, add(2, 2))", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<i32, Error> {
    let tokens = tokenize(source)?;
    if options.trace {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        eprintln!("tokens: {}", rendered.join(" "));
    }

    let expr = parse(tokens, options.max_depth)?;
    if options.trace {
        eprintln!("tree:   {expr}");
    }

    let mut context = Context::new();
    Ok(context.eval(&expr)?)
}
