use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::parser::tree::{Node, SyntaxKind};

/// Recursive descent parser over the scanned token sequence
///
/// One method per grammar rule, one token of lookahead, no backtracking.
/// Routing inside a rule happens on the current token's text (the `(` and
/// `)` checks); everything else is consumed where the grammar demands it.
///
/// ```text
/// Program ::= { SExpr }
/// SExpr   ::= Atom | List
/// List    ::= "(" ")" | "(" Seq ")"
/// Seq     ::= SExpr Seq | SExpr
/// Atom    ::= ID | INT | REAL | STRING
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a parser over a scanned token sequence
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the whole token sequence into a `Program` node.
    ///
    /// An empty token sequence yields a `Program` with no children.
    pub fn parse(&mut self) -> Result<Node> {
        let mut children = Vec::new();

        while !self.is_at_end() {
            children.push(self.parse_sexpr()?);
        }

        tracing::debug!("parsed {} top-level forms", children.len());

        Ok(Node::interior(SyntaxKind::Program, children))
    }

    /// `SExpr ::= Atom | List`
    fn parse_sexpr(&mut self) -> Result<Node> {
        let child = if self.check_text("(") {
            self.parse_list()?
        } else {
            self.parse_atom()?
        };
        Ok(Node::interior(SyntaxKind::SExpr, vec![child]))
    }

    /// `List ::= "(" ")" | "(" Seq ")"`
    ///
    /// The parenthesis leaves are part of the node: children are `(`, the
    /// element chain (absent for the empty list), `)`.
    fn parse_list(&mut self) -> Result<Node> {
        let mut children = vec![self.expect_literal("(")?];

        if self.check_text(")") {
            children.push(self.expect_literal(")")?);
            return Ok(Node::interior(SyntaxKind::List, children));
        }

        while !self.is_at_end() && !self.check_text(")") {
            children.push(self.parse_seq()?);
        }
        children.push(self.expect_literal(")")?);

        Ok(Node::interior(SyntaxKind::List, children))
    }

    /// `Seq ::= SExpr Seq | SExpr`
    ///
    /// Produces the right-leaning chain the grammar spells out: one `SExpr`
    /// per `Seq` level, with the rest of the elements nested in a child
    /// `Seq`. Consumers rely on this shape; it must not be flattened.
    fn parse_seq(&mut self) -> Result<Node> {
        let mut children = vec![self.parse_sexpr()?];

        if !self.is_at_end() && !self.check_text(")") {
            children.push(self.parse_seq()?);
        }

        Ok(Node::interior(SyntaxKind::Seq, children))
    }

    /// `Atom ::= ID | INT | REAL | STRING`
    ///
    /// Only those four token kinds are accepted; a parenthesis in atom
    /// position is a syntax error.
    fn parse_atom(&mut self) -> Result<Node> {
        match self.tokens.get(self.current) {
            Some(token) if token.kind != TokenKind::Literal => {
                let leaf = Node::leaf(self.advance());
                Ok(Node::interior(SyntaxKind::Atom, vec![leaf]))
            }
            Some(token) => Err(Error::UnexpectedToken {
                expected: "an atom".to_string(),
                found: token.lexeme.clone(),
            }),
            None => Err(Error::UnexpectedEof {
                expected: "an atom".to_string(),
            }),
        }
    }

    /// Consumes the current token if its text equals the expected literal,
    /// returning it as a leaf; fails immediately otherwise.
    fn expect_literal(&mut self, literal: &str) -> Result<Node> {
        match self.tokens.get(self.current) {
            Some(token) if token.lexeme == literal => Ok(Node::leaf(self.advance())),
            Some(token) => Err(Error::UnexpectedToken {
                expected: format!("`{literal}`"),
                found: token.lexeme.clone(),
            }),
            None => Err(Error::UnexpectedEof {
                expected: format!("`{literal}`"),
            }),
        }
    }

    fn check_text(&self, literal: &str) -> bool {
        self.tokens
            .get(self.current)
            .is_some_and(|token| token.lexeme == literal)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}
