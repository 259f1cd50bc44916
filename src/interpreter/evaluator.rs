/// Binary operator evaluation logic.
///
/// Holds the dispatch table of the language: for every operator, which pairs
/// of value types are accepted and what they produce. Split into equality,
/// numeric arithmetic and string operations.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the tree walk over [`crate::ast::Expr`], the result type shared
/// by all evaluation functions and rendering of evaluated expressions.
pub mod core;
