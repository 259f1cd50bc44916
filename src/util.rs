/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, and the canonical
/// text rendering of floats shared by `Display` and string concatenation.
pub mod num;
