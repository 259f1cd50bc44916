//! # pebble
//!
//! pebble is the front end of a small expression language written in Rust.
//! It tokenizes source text and evaluates expression trees over booleans,
//! integers, floats and strings, with integer to float promotion and string
//! operators. Assembling tokens into trees is left to a parser built on top
//! of this crate.

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

use crate::{error::LexError, interpreter::lexer::tokenize};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the binary operators that
/// represent expressions as a tree. Trees are produced by a parser and
/// evaluated by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, variable and binary operation nodes.
/// - Maps operator tokens to binary operators.
pub mod ast;
/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating code, with enough detail (positions, operators, operand types)
/// for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together lexing, values and evaluation.
///
/// # Responsibilities
/// - Provides the lexer, the runtime value types and the evaluator.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Render floats consistently wherever they are turned into text.
pub mod util;

/// Returns the token listing of a source string.
///
/// Every token is written on its own line as its kind followed by the text
/// it was matched from.
///
/// # Errors
/// Returns the first lexical error encountered; nothing is listed in that
/// case.
///
/// # Examples
/// ```
/// use pebble::token_listing;
///
/// let listing = token_listing("print x == 5").unwrap();
/// assert_eq!(listing, "PRINT print\nVARIABLE x\nEQUAL_EQUAL ==\nINTEGER 5\n");
///
/// assert!(token_listing("x = 1 @ 2").is_err());
/// ```
pub fn token_listing(source: &str) -> Result<String, LexError> {
    tokenize(source).map(|token| token.map(|t| format!("{} {}\n", t.kind, t.text)))
                    .collect()
}
