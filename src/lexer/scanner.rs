//! Lexer/Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into tokens.

use tracing::{debug, trace};

use super::token::{keyword, Literal, Token, TokenKind};
use crate::error::LexError;

/// Lexer for Lox source code
///
/// A lexer is built from one source text and consumed by a single call to
/// [`Lexer::tokenize`] or [`Lexer::tokenize_all`].
#[derive(Debug)]
pub struct Lexer {
    source: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Tokenize the source code, stopping at the first error
    ///
    /// On success the last token is always [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            if let Some(token) = self.scan_token()? {
                trace!(%token, "scanned token");
                tokens.push(token);
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(tokens = tokens.len(), lines = self.line, "scan complete");

        Ok(tokens)
    }

    /// Tokenize the whole source, recording every error in place
    ///
    /// Each failure is pushed as an `Err` at the point it occurred and
    /// scanning carries on after it. The sequence always ends with
    /// `Ok` of the end-of-input token.
    pub fn tokenize_all(mut self) -> Vec<Result<Token, LexError>> {
        let mut items = Vec::new();
        let mut errors = 0usize;

        while !self.is_at_end() {
            self.start = self.current;
            match self.scan_token() {
                Ok(Some(token)) => {
                    trace!(%token, "scanned token");
                    items.push(Ok(token));
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(line = err.line(), error = %err, "recovering from scan error");
                    errors += 1;
                    items.push(Err(err));
                }
            }
        }

        items.push(Ok(Token::eof(self.line)));
        debug!(items = items.len(), errors, lines = self.line, "scan complete");

        items
    }

    /// Scan a single lexeme, returning `None` for whitespace and comments
    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let c = self.advance();

        let kind = match c {
            // Single-character tokens
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            // One- or two-character tokens
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            // Comments
            '/' => {
                if self.match_char('/') {
                    // Line comment; the newline is left for the main loop
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    return Ok(None);
                } else if self.match_char('*') {
                    self.skip_block_comment()?;
                    return Ok(None);
                }
                TokenKind::Slash
            }

            // Whitespace (skip)
            ' ' | '\r' | '\t' => return Ok(None),

            '\n' => {
                self.line += 1;
                return Ok(None);
            }

            '"' => return self.scan_string().map(Some),

            c if c.is_ascii_digit() => return Ok(Some(self.scan_number())),

            c if c.is_alphabetic() || c == '_' => return Ok(Some(self.scan_identifier())),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    line: self.line,
                    ch: c,
                })
            }
        };

        Ok(Some(Token::new(kind, self.lexeme(), self.line)))
    }

    /// Scan a string literal; the opening quote is already consumed
    ///
    /// Strings may span lines. No escape sequences are decoded.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start_line = self.line;

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString { line: self.line });
        }

        // Consume closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        Ok(Token::with_literal(
            TokenKind::String,
            self.lexeme(),
            Literal::String(value),
            start_line,
        ))
    }

    /// Scan a number literal: digits, optionally `.` followed by digits
    fn scan_number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' without a digit after it belongs to the next token
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        // Always valid float syntax at this point; overlong runs become infinity.
        let value = lexeme.parse::<f64>().unwrap_or(f64::NAN);
        Token::with_literal(TokenKind::Number, lexeme, Literal::Number(value), self.line)
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme = self.lexeme();

        match keyword(&lexeme) {
            Some(kind) => Token::new(kind, lexeme, self.line),
            None => {
                let name = Literal::Identifier(lexeme.clone());
                Token::with_literal(TokenKind::Identifier, lexeme, name, self.line)
            }
        }
    }

    /// Skip a block comment; the opening `/*` is already consumed
    ///
    /// Comments do not nest: the first `*/` closes the comment.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        loop {
            if self.is_at_end() {
                return Err(LexError::UnterminatedBlockComment { line: self.line });
            }

            // peek_next() yields '\0' past the end, so a lone trailing '*' never matches
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return Ok(());
            }

            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }

    /// Pick `yes` and consume `next` if it follows, otherwise `no`
    fn either(&mut self, next: char, yes: TokenKind, no: TokenKind) -> TokenKind {
        if self.match_char(next) {
            yes
        } else {
            no
        }
    }

    /// Source text of the current lexeme
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    /// Peek one past the current character without consuming anything
    fn peek_next(&self) -> char {
        self.source.get(self.current + 1).copied().unwrap_or('\0')
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
