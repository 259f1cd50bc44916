use std::{iter::FusedIterator, ops::Range};

use logos::Logos;

use crate::{error::LexError, interpreter::value::core::Value};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// When several rules match at the same position the longest lexeme wins and
/// ties go to the fixed lexeme, so `==` is never split into two `=`, `-3.5`
/// is a single float and keywords only match as whole words.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Decimal numbers with a fractional part, such as `3.14` or `-0.5`.
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Float,
    /// Whole numbers, such as `42` or `-7`.
    #[regex(r"-?[0-9]+")]
    Integer,
    /// Quoted text: `"""..."""`, `"..."` or `'...'`. No escapes.
    #[regex(r#""""([^"\n]|"[^"\n]|""[^"\n])*""""#)]
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    String,
    /// `print`
    #[token("print")]
    Print,
    /// `true` or `false`
    #[token("true")]
    #[token("false")]
    Boolean,
    /// Identifiers such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    /// `+`
    #[token("+")]
    Plus,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    OpenParens,
    /// `)`
    #[token(")")]
    CloseParens,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Print => "PRINT",
            Self::Boolean => "BOOLEAN",
            Self::Variable => "VARIABLE",
            Self::Plus => "PLUS",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Equal => "EQUAL",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::OpenParens => "OPEN_PARENS",
            Self::CloseParens => "CLOSE_PARENS",
        };
        write!(f, "{name}")
    }
}

/// A classified lexeme: its kind plus the exact text it was matched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the lexeme is.
    pub kind: TokenKind,
    /// The matched source text, delimiters included.
    pub text: &'src str,
    /// Byte range of the lexeme in the source.
    pub span: Range<usize>,
}

impl Token<'_> {
    /// Converts a literal token into the value it denotes.
    ///
    /// `FLOAT`, `INTEGER`, `BOOLEAN` and `STRING` tokens produce a value; the
    /// quotes around a string are stripped. Every other kind yields `None`.
    ///
    /// # Errors
    /// Returns [`LexError::InvalidLiteral`] if an integer literal does not fit
    /// in 64 bits.
    ///
    /// # Example
    /// ```
    /// use pebble::interpreter::{lexer::tokenize_all, value::core::Value};
    ///
    /// let tokens = tokenize_all("'hi' -4").unwrap();
    /// assert_eq!(tokens[0].literal_value().unwrap(), Some(Value::from("hi")));
    /// assert_eq!(tokens[1].literal_value().unwrap(), Some(Value::Integer(-4)));
    /// ```
    pub fn literal_value(&self) -> LexResult<Option<Value>> {
        let invalid = || LexError::InvalidLiteral { text:   self.text.to_string(),
                                                    offset: self.span.start, };

        Ok(Some(match self.kind {
                    TokenKind::Integer => Value::Integer(self.text.parse().map_err(|_| invalid())?),
                    TokenKind::Float => Value::Float(self.text.parse().map_err(|_| invalid())?),
                    TokenKind::Boolean => Value::Boolean(self.text == "true"),
                    TokenKind::String => Value::String(strip_quotes(self.text).to_string()),
                    _ => return Ok(None),
                }))
    }
}

/// Removes the delimiters from a string lexeme.
fn strip_quotes(text: &str) -> &str {
    let width = if text.len() >= 6 && text.starts_with("\"\"\"") { 3 } else { 1 };
    &text[width..text.len() - width]
}

/// A lazy stream of tokens over one source string.
///
/// The stream yields `Err` at most once: after a lexical error the scan is
/// aborted and the iterator is exhausted.
pub struct Tokens<'src> {
    lexer:  logos::Lexer<'src, TokenKind>,
    failed: bool,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = LexResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let kind = self.lexer.next()?;
        let span = self.lexer.span();
        let text = self.lexer.slice();

        if let Ok(kind) = kind {
            Some(Ok(Token { kind, text, span }))
        } else {
            self.failed = true;
            Some(Err(LexError::unexpected(self.lexer.source(), span.start, text)))
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Starts a lazy scan of `source`.
///
/// # Example
/// ```
/// use pebble::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("print x == 5").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Print, TokenKind::Variable, TokenKind::EqualEqual, TokenKind::Integer]);
/// ```
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens { lexer:  TokenKind::lexer(source),
             failed: false, }
}

/// Tokenizes the whole of `source`, stopping at the first lexical error.
///
/// # Errors
/// Returns the [`LexError`] for the first position no token rule matches.
pub fn tokenize_all(source: &str) -> LexResult<Vec<Token<'_>>> {
    tokenize(source).collect()
}
