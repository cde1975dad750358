//! # lispish - a minimal S-expression front end
//!
//! Converts raw text in a minimal S-expression language into a parse tree
//! that mirrors the grammar production-for-production. This crate is the
//! front-end stage only: no evaluation, no symbol resolution, no macro
//! expansion. Downstream tools receive either a grammar-faithful tree or
//! an error naming the failing stage.
//!
//! ## Grammar
//!
//! ```text
//! Program ::= { SExpr }
//! SExpr   ::= Atom | List
//! List    ::= "(" ")" | "(" Seq ")"
//! Seq     ::= SExpr Seq | SExpr
//! Atom    ::= ID | INT | REAL | STRING
//! ```
//!
//! ## Architecture
//!
//! Two components, consumed in strict order:
//!
//! ```text
//! Source Text → Scanner → Tokens → Parser → Parse Tree
//! ```
//!
//! - [`Scanner`] - segments source text into classified tokens
//! - [`Parser`] - builds the parse tree by recursive descent
//! - [`Node`] - the tree element: a token leaf or a production with children
//!
//! Both components are re-entrant: each call works on its own input and
//! holds no residual state, so concurrent use on disjoint inputs is safe by
//! construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispish::{parse, tokenize};
//!
//! # fn main() -> lispish::Result<()> {
//! let tokens = tokenize("(+ 3.14 (* 4 7))")?;
//! let tree = parse(tokens)?;
//!
//! // The Program node owns one SExpr per top-level form.
//! assert_eq!(tree.kind_name(), "Program");
//! assert_eq!(tree.children().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! The struct-level API gives the same result one stage at a time:
//!
//! ```rust
//! use lispish::{Parser, Scanner};
//!
//! # fn main() -> lispish::Result<()> {
//! let mut scanner = Scanner::new("(define foo 3)");
//! let tokens = scanner.scan_tokens()?;
//!
//! let mut parser = Parser::new(tokens);
//! let tree = parser.parse()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Lexing and parsing failures are ordinary [`Result`] values, not panics.
//! The first error aborts the pass; there is no recovery and no partial
//! tree.
//!
//! ```rust
//! use lispish::tokenize;
//!
//! let err = tokenize("\"unterminated").unwrap_err();
//! assert!(err.is_lex_error());
//! assert!(err.to_string().contains("line 1, column 1"));
//! ```

/// Version of the lispish front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{tokenize, Scanner, Token, TokenKind};
pub use parser::{parse, Node, Parser, SyntaxKind};
