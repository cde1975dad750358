use crate::error::{Error, Result};
use crate::lexer::token::{Token, TokenKind};

/// Scanner for the S-expression token grammar
///
/// Scans left-to-right, trying the patterns in fixed priority order at each
/// position: whitespace, parenthesis, real, integer, string, identifier.
/// The first pattern that matches wins, taking its own longest match. Real
/// is tried before integer so that `3.14` never loses its leading digits to
/// an integer token.
pub struct Scanner {
    /// Source text as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl Scanner {
    /// Creates a new scanner from source text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from the source and returns them in source order.
    ///
    /// Whitespace produces no token. The first position where no pattern
    /// matches aborts the scan with [`Error::UnexpectedCharacter`].
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        tracing::debug!("scanned {} tokens", self.tokens.len());

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.source[self.current];

        if c.is_whitespace() {
            self.advance();
            return Ok(());
        }

        if c == '(' || c == ')' {
            self.advance();
            self.add_token(TokenKind::Literal);
            return Ok(());
        }

        // Real before int: both may start with a sign or digit.
        if let Some(len) = self.match_real() {
            self.advance_by(len);
            self.add_token(TokenKind::Real);
        } else if let Some(len) = self.match_int() {
            self.advance_by(len);
            self.add_token(TokenKind::Int);
        } else if let Some(len) = self.match_string() {
            self.advance_by(len);
            self.add_token(TokenKind::String);
        } else if let Some(len) = self.match_id() {
            self.advance_by(len);
            self.add_token(TokenKind::Id);
        } else {
            return Err(Error::UnexpectedCharacter {
                line: self.line,
                col: self.column,
                found: c,
            });
        }

        Ok(())
    }

    /// `[+-]? [0-9]* '.' [0-9]+` — the decimal point and at least one digit
    /// after it are mandatory, digits before it are not.
    fn match_real(&self) -> Option<usize> {
        let mut i = self.current;
        if matches!(self.char_at(i), Some('+') | Some('-')) {
            i += 1;
        }
        while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        if self.char_at(i) != Some('.') {
            return None;
        }
        i += 1;
        let fraction_start = i;
        while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        (i > fraction_start).then(|| i - self.current)
    }

    /// `[+-]? [0-9]+`
    fn match_int(&self) -> Option<usize> {
        let mut i = self.current;
        if matches!(self.char_at(i), Some('+') | Some('-')) {
            i += 1;
        }
        let digit_start = i;
        while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
            i += 1;
        }
        (i > digit_start).then(|| i - self.current)
    }

    /// A double quote, then any mix of escape pairs (`\` plus one
    /// character) and plain characters (anything but `\` and `"`), then a
    /// closing double quote. An unterminated string matches nothing, and
    /// since no other pattern can start at a `"`, it surfaces as a lex
    /// error at the opening quote.
    fn match_string(&self) -> Option<usize> {
        let mut i = self.current;
        if self.char_at(i) != Some('"') {
            return None;
        }
        i += 1;
        loop {
            match self.char_at(i)? {
                '"' => return Some(i + 1 - self.current),
                '\\' => {
                    self.char_at(i + 1)?;
                    i += 2;
                }
                _ => i += 1,
            }
        }
    }

    /// One-or-more characters, none of which is whitespace, `"`, `(`
    /// or `)`. Tried last, so signs, lone dots and other leftovers of the
    /// number patterns land here.
    fn match_id(&self) -> Option<usize> {
        let mut i = self.current;
        while self
            .char_at(i)
            .is_some_and(|c| !c.is_whitespace() && !matches!(c, '"' | '(' | ')'))
        {
            i += 1;
        }
        (i > self.current).then(|| i - self.current)
    }

    fn char_at(&self, i: usize) -> Option<char> {
        self.source.get(i).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme));
    }
}
