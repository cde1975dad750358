//! Error types for the lispish front end

use thiserror::Error;

/// Front-end errors
///
/// Exactly two failure stages exist: lexing and parsing. A lexing failure
/// is always [`Error::UnexpectedCharacter`]; the other variants are parse
/// failures. Use [`Error::is_lex_error`] to tell the stages apart without
/// matching on variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No token pattern matched at a non-whitespace position
    ///
    /// **Triggered by:** a character no pattern can start, which in this
    /// grammar means an unterminated string literal (every other
    /// non-whitespace character is at least a valid identifier).
    /// **Example:** `"abc` (missing closing quote)
    #[error("lex error at line {line}, column {col}: unexpected character {found:?}")]
    UnexpectedCharacter {
        /// Line number where lexing stopped (1-indexed)
        line: usize,
        /// Column number where lexing stopped (1-indexed)
        col: usize,
        /// The character that matched no pattern
        found: char,
    },

    /// The parser required a specific token and the next token differs
    ///
    /// **Triggered by:** a missing parenthesis, or a parenthesis where an
    /// atom belongs.
    /// **Example:** `())` (stray closing parenthesis)
    #[error("syntax error: expected {expected}, found `{found}`")]
    UnexpectedToken {
        /// What the active grammar rule required
        expected: String,
        /// Text of the token actually present
        found: String,
    },

    /// Input ended while a grammar production was still open
    ///
    /// **Example:** `(+ 3.14 (* 4 7)` (missing final closing parenthesis)
    #[error("syntax error: expected {expected}, found end of input")]
    UnexpectedEof {
        /// What the active grammar rule required
        expected: String,
    },
}

impl Error {
    /// True for failures raised by the lexer, false for parser failures.
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Error::UnexpectedCharacter { .. })
    }
}

/// Result type for lispish operations
pub type Result<T> = std::result::Result<T, Error>;
