//! Syntactic analysis
//!
//! Parses a scanned token sequence into a parse tree that mirrors the
//! grammar production-for-production, parenthesis leaves included.

mod sexpr_parser;
mod tree;

pub use sexpr_parser::Parser;
pub use tree::{Node, SyntaxKind};

use crate::error::Result;
use crate::lexer::Token;

/// Parses a token sequence into a `Program` node in one call.
///
/// Equivalent to constructing a [`Parser`] and running [`Parser::parse`];
/// each call is independent and holds no state.
pub fn parse(tokens: Vec<Token>) -> Result<Node> {
    Parser::new(tokens).parse()
}
