#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// No token rule matches the input at the scan position.
    UnexpectedInput {
        /// The unmatched text.
        text:   String,
        /// Byte offset of the unmatched text in the source.
        offset: usize,
        /// The source line where the error occurred (1-based).
        line:   usize,
        /// The column where the error occurred (1-based, in characters).
        column: usize,
    },
    /// A literal token could not be converted into a value.
    InvalidLiteral {
        /// The literal as written in the source.
        text:   String,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
}

impl LexError {
    /// Builds an [`LexError::UnexpectedInput`] for `text` found at byte
    /// `offset` of `source`, resolving the offset to a line and column.
    #[must_use]
    pub fn unexpected(source: &str, offset: usize, text: &str) -> Self {
        let prefix = &source[..offset];
        let line = prefix.matches('\n').count() + 1;
        let column = prefix.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;

        Self::UnexpectedInput { text: text.to_string(),
                                offset,
                                line,
                                column }
    }

    /// Byte offset in the source at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedInput { offset, .. } | Self::InvalidLiteral { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedInput { text, line, column, .. } => write!(f,
                                                                        "Error on line {line}, column {column}: Unexpected input: {text}."),
            Self::InvalidLiteral { text, offset } => {
                write!(f, "Error at offset {offset}: Invalid literal: {text}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
