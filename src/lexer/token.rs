use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source text
///
/// The lexeme is the exact matched text: string tokens keep their
/// surrounding quotes and escape sequences verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical classification of the token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given kind and matched text
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

/// All token classes the scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A single parenthesis, `(` or `)`
    Literal,
    /// Real number: optional sign, optional integer digits, a decimal
    /// point, one-or-more fraction digits
    Real,
    /// Integer: optional sign, one-or-more digits
    Int,
    /// Double-quoted string with backslash escapes
    String,
    /// Identifier: any run of characters containing no whitespace,
    /// double quote, or parenthesis
    Id,
}

impl TokenKind {
    /// Grammar-level name of this token class.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Literal => "LITERAL",
            TokenKind::Real => "REAL",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Id => "ID",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Literal.name(), "LITERAL");
        assert_eq!(TokenKind::Real.name(), "REAL");
        assert_eq!(TokenKind::Int.name(), "INT");
        assert_eq!(TokenKind::String.name(), "STRING");
        assert_eq!(TokenKind::Id.name(), "ID");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Int, "42");
        assert_eq!(token.to_string(), "INT 42");
    }
}
