/// Lexical errors.
///
/// Defines the errors raised while tokenizing source text: input that no
/// token rule matches, and literal tokens whose text cannot be turned into a
/// value.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operators
/// applied to unsupported operand types, division by zero, overflow and
/// violated preconditions of the string operations.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
