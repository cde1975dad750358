//! Lexical analysis
//!
//! Converts raw S-expression source text into an ordered sequence of
//! classified tokens.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use crate::error::Result;

/// Tokenizes source text in one call.
///
/// Equivalent to constructing a [`Scanner`] and running
/// [`Scanner::scan_tokens`]; each call is independent and holds no state.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}
