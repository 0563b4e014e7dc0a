//! Lexical errors
//!
//! Errors are plain values collected by the lexer; none of them stops the
//! scan. Each one knows its line and column and can be turned into a
//! [`Diagnostic`] for rendering.

use liza_error::{Diagnostic, ErrorCode, Position, Span};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexError {
    #[error("invalid character {ch:?} on line {line}")]
    InvalidCharacter { ch: char, line: u32, column: u32 },

    #[error("line {line}: {text} is not a number")]
    MalformedNumber { text: String, line: u32, column: u32 },

    #[error("missing closing quote for string starting on line {line}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("unknown escape sequence '\\{ch}' on line {line}")]
    UnknownEscape { ch: char, line: u32, column: u32 },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::InvalidCharacter { line, .. }
            | LexError::MalformedNumber { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::UnknownEscape { line, .. } => *line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            LexError::InvalidCharacter { column, .. }
            | LexError::MalformedNumber { column, .. }
            | LexError::UnterminatedString { column, .. }
            | LexError::UnknownEscape { column, .. } => *column,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line(), self.column())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidCharacter { .. } => ErrorCode::INVALID_CHAR,
            LexError::MalformedNumber { .. } => ErrorCode::INVALID_NUMBER,
            LexError::UnterminatedString { .. } => ErrorCode::UNTERMINATED_STRING,
            LexError::UnknownEscape { .. } => ErrorCode::UNKNOWN_ESCAPE,
        }
    }

    /// Unknown escapes still produce a usable string token
    pub fn is_warning(&self) -> bool {
        matches!(self, LexError::UnknownEscape { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let start = self.position();
        let base = if self.is_warning() {
            Diagnostic::warning(self.to_string())
        } else {
            Diagnostic::error(self.to_string())
        };
        let base = base.with_code(self.code());

        match self {
            LexError::InvalidCharacter { .. } => base
                .with_label(Span::point(start), "not part of any token")
                .with_help("remove the character or place it inside a string literal"),
            LexError::MalformedNumber { text, .. } => {
                let width = text.chars().count() as u32;
                let diagnostic =
                    base.with_label(Span::with_width(start, width), "could not convert to a number");
                if text.contains('.') {
                    diagnostic.with_help("a float literal contains exactly one '.'")
                } else {
                    diagnostic.with_note("integer literals must fit in a signed 64-bit value")
                }
            }
            LexError::UnterminatedString { .. } => base
                .with_label(Span::point(start), "string starts here but was not closed")
                .with_help("add \" at the end of the string"),
            LexError::UnknownEscape { ch, .. } => base
                .with_label(Span::with_width(start, 2), "unknown escape")
                .with_note(format!("the escape was read as a plain '{}'", ch))
                .with_help("valid escapes are \\b \\f \\n \\r \\t \\v \\\\ \\' \\\""),
        }
    }
}
