//! Lexer for the Liza language
//!
//! Converts source code into a flat sequence of tokens in a single
//! iterative pass over the code points of the input.

use std::sync::Arc;

use liza_error::Diagnostics;
use tracing::{debug, trace};

use crate::chars::{escape, is_digit, is_letter, is_word_continue, SENTINEL};
use crate::error::LexError;
use crate::token::{is_keyword, Literal, Token, TokenKind};

/// The Liza language Lexer
pub struct Lexer {
    /// Source code characters
    chars: Vec<char>,
    /// Current position (index in chars vector)
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
    /// Current column (1-indexed)
    column: u32,
    /// Name of the source, copied into every token
    file: Arc<str>,
    /// Emitted tokens, in source order
    tokens: Vec<Token>,
    /// Accumulated errors, in source order
    errors: Vec<LexError>,
}

/// Everything a finished scan produced
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Lexed {
    /// True when at least one error (not counting warnings) was recorded
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| !e.is_warning())
    }

    /// Converts the recorded errors into renderable diagnostics
    pub fn diagnostics(&self) -> Diagnostics {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

impl Lexer {
    /// Creates a new lexer for the given source code
    pub fn new(source: &str, file: impl Into<Arc<str>>) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            file: file.into(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the current character, or the sentinel past the end
    fn current(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(SENTINEL)
    }

    /// Returns the character after the current one
    fn lookahead(&self) -> char {
        self.chars.get(self.pos + 1).copied().unwrap_or(SENTINEL)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Advances to the next character
    fn advance(&mut self) {
        if self.at_end() {
            return;
        }
        if self.current() == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn push(&mut self, kind: TokenKind, value: Literal) {
        self.push_at(kind, value, self.line);
    }

    fn push_at(&mut self, kind: TokenKind, value: Literal, line: u32) {
        self.tokens
            .push(Token::new(kind, value, line, Arc::clone(&self.file)));
    }

    fn record(&mut self, error: LexError) {
        trace!(file = %self.file, %error, "lexical error");
        self.errors.push(error);
    }

    /// Reads an identifier or keyword
    fn read_word(&mut self) {
        let mut word = String::new();

        while is_word_continue(self.current()) {
            word.push(self.current());
            self.advance();
        }

        let kind = if is_keyword(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(kind, Literal::Text(word));
    }

    /// Reads an integer or float literal
    fn read_number(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        let mut has_dot = false;

        while is_digit(self.current()) || self.current() == '.' {
            has_dot |= self.current() == '.';
            text.push(self.current());
            self.advance();
        }

        let value = if has_dot {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Literal::Float)
        } else {
            text.parse::<i64>().ok().map(Literal::Int)
        };

        match value {
            Some(literal) => {
                let kind = if has_dot {
                    TokenKind::Float
                } else {
                    TokenKind::Int
                };
                self.push(kind, literal);
            }
            None => {
                self.push(TokenKind::Invalid, Literal::Text("NaN".into()));
                self.record(LexError::MalformedNumber { text, line, column });
            }
        }
    }

    /// Reads a string literal; the current character is the opening quote
    fn read_string(&mut self) {
        let (line, column) = (self.line, self.column);
        self.advance();
        let mut value = String::new();

        loop {
            if self.at_end() {
                self.record(LexError::UnterminatedString { line, column });
                return;
            }

            match self.current() {
                '"' => {
                    self.advance();
                    break;
                }
                '\\' => {
                    let (escape_line, escape_column) = (self.line, self.column);
                    self.advance();
                    if self.at_end() {
                        continue;
                    }
                    let ch = self.current();
                    match escape(ch) {
                        Some(escaped) => value.push(escaped),
                        None => {
                            value.push(ch);
                            self.record(LexError::UnknownEscape {
                                ch,
                                line: escape_line,
                                column: escape_column,
                            });
                        }
                    }
                    self.advance();
                }
                ch => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        self.push_at(TokenKind::String, Literal::Text(value), line);
    }

    /// Reads the next token, if any
    ///
    /// Returns false once the end-of-input token has been emitted.
    fn scan_token(&mut self) -> bool {
        if self.at_end() {
            self.push(TokenKind::EndOfInput, Literal::None);
            return false;
        }

        let ch = self.current();

        if is_letter(ch) {
            self.read_word();
            return true;
        }

        if is_digit(ch) {
            self.read_number();
            return true;
        }

        if let Some(kind) = TokenKind::from_pair(ch, self.lookahead()) {
            let spelling: String = [ch, self.lookahead()].iter().collect();
            self.push(kind, Literal::Text(spelling));
            self.advance();
            self.advance();
            return true;
        }

        match ch {
            '"' => self.read_string(),
            '\n' => {
                self.push(TokenKind::NewStatement, Literal::Char(ch));
                self.advance();
            }
            ' ' | '\t' => self.advance(),
            _ => {
                match TokenKind::from_symbol(ch) {
                    Some(kind) => self.push(kind, Literal::Char(ch)),
                    None => {
                        self.push(TokenKind::Invalid, Literal::Char(ch));
                        self.record(LexError::InvalidCharacter {
                            ch,
                            line: self.line,
                            column: self.column,
                        });
                    }
                }
                self.advance();
            }
        }

        true
    }

    /// Tokenizes the entire source code
    pub fn tokenize(mut self) -> Lexed {
        debug!(file = %self.file, chars = self.chars.len(), "lexing");

        while self.scan_token() {}

        debug!(
            file = %self.file,
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lexed"
        );

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

/// Tokenizes source code and returns the tokens and errors
pub fn scan(source: &str, file: &str) -> (Vec<Token>, Vec<LexError>) {
    let Lexed { tokens, errors } = Lexer::new(source, file).tokenize();
    (tokens, errors)
}
