//! liza-lexer - Lexer/Tokenizer for the Liza language
//!
//! This crate converts Liza source code into a flat sequence of tokens.
//!
//! # Features
//!
//! - Keywords: `if`, `else`, `for`, `func`, `return` and the type names
//! - Literals: integers, floats, strings with escapes (multi-line allowed)
//! - Two-character comparisons (`<=`, `>=`, `!=`, `==`)
//! - Line feeds and `;` as statement separators
//! - Errors are collected, never thrown
//!
//! # Example
//!
//! ```rust
//! use liza_lexer::{Lexer, TokenKind};
//!
//! let source = r#"
//! int x = 10
//! string y = "hello"
//! "#;
//!
//! let lexed = Lexer::new(source, "example.lz").tokenize();
//!
//! for token in &lexed.tokens {
//!     println!("{}", token);
//! }
//! assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
//! ```

pub mod chars;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::{scan, Lexed, Lexer};
pub use token::{is_keyword, Literal, Token, TokenKind, KEYWORDS};
