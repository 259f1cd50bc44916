/// The evaluator module reduces AST nodes to values.
///
/// The evaluator walks the expression tree, evaluates both operands of every
/// binary operation left to right, and dispatches the operator on the types
/// of the resulting values. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Evaluates AST nodes into exactly one runtime value.
/// - Implements the per-type operator table, including numeric promotion and
///   the string operations.
/// - Reports runtime errors such as division by zero or unsupported operand
///   types.
pub mod evaluator;
/// The lexer module tokenizes source code for a parser.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens,
/// each classified by kind and carrying the exact text it was matched from.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and byte span.
/// - Recognizes numeric, string and boolean literals, identifiers, keywords
///   and operators, skipping whitespace.
/// - Reports lexical errors with their position and aborts the scan.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: boolean, integer, float and string.
/// - Renders values as text.
pub mod value;
