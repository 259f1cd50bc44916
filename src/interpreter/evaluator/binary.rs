/// Numeric arithmetic on integers and floats.
pub mod arithmetic;
/// Operator dispatch on the left operand.
pub mod core;
/// Equality between values.
pub mod equality;
/// Concatenation, truncation and repetition of strings.
pub mod string;
