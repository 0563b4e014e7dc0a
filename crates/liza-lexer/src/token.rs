//! Tokens for the Liza language
//!
//! Defines all token types that the lexer can produce, the literal payload
//! carried by each token, and the fixed keyword and symbol tables.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Reserved identifier spellings
pub const KEYWORDS: [&str; 10] = [
    "if", "else", "for", "func", "return", "string", "int", "float", "bool", "void",
];

/// Returns true if `spelling` is exactly a reserved word
pub fn is_keyword(spelling: &str) -> bool {
    KEYWORDS.contains(&spelling)
}

/// All token types for the Liza language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Unrecognized character or malformed number
    Invalid,
    /// End of input, always the last token
    EndOfInput,

    // =========================================
    // Delimiters
    // =========================================
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,

    // =========================================
    // Operators
    // =========================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `\`
    Backslash,
    /// Line feed or `;`
    NewStatement,
    /// `=`
    Equal,
    /// `!`
    Not,
    /// `,`
    Comma,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    MoreThan,
    /// `>=`
    MoreThanOrEqual,
    /// `==`
    DoubleEqual,
    /// `!=`
    NotEqual,

    // =========================================
    // Literals and words
    // =========================================
    Int,
    Float,
    String,
    Identifier,
    Keyword,
}

impl TokenKind {
    /// Maps a single-character symbol to its token type
    pub fn from_symbol(ch: char) -> Option<TokenKind> {
        match ch {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '\\' => Some(TokenKind::Backslash),
            '=' => Some(TokenKind::Equal),
            '!' => Some(TokenKind::Not),
            ',' => Some(TokenKind::Comma),
            '<' => Some(TokenKind::LessThan),
            '>' => Some(TokenKind::MoreThan),
            ';' => Some(TokenKind::NewStatement),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            _ => None,
        }
    }

    /// Maps a two-character operator to its token type
    pub fn from_pair(first: char, second: char) -> Option<TokenKind> {
        match (first, second) {
            ('<', '=') => Some(TokenKind::LessThanOrEqual),
            ('>', '=') => Some(TokenKind::MoreThanOrEqual),
            ('!', '=') => Some(TokenKind::NotEqual),
            ('=', '=') => Some(TokenKind::DoubleEqual),
            _ => None,
        }
    }

    /// Upper-case name used by the plain token listing
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::EndOfInput => "EOF",
            TokenKind::OpenParen => "OPENPAREN",
            TokenKind::CloseParen => "CLOSEPAREN",
            TokenKind::OpenBrace => "OPENBRACE",
            TokenKind::CloseBrace => "CLOSEBRACE",
            TokenKind::OpenBracket => "OPENBRACKET",
            TokenKind::CloseBracket => "CLOSEBRACKET",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::NewStatement => "NEWINSTRUCTION",
            TokenKind::Equal => "EQUAL",
            TokenKind::Not => "NOT",
            TokenKind::Comma => "COMMA",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::LessThanOrEqual => "LESSTHANOREQUAL",
            TokenKind::MoreThan => "MORETHAN",
            TokenKind::MoreThanOrEqual => "MORETHANOREQUAL",
            TokenKind::DoubleEqual => "DOUBLEEQUAL",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value carried by a token
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Literal {
    None,
    Int(i64),
    Float(f64),
    /// String contents, word spelling or operator spelling
    Text(String),
    /// Raw punctuation echo
    Char(char),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => Ok(()),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
            Literal::Char(c) => write!(f, "{}", c),
        }
    }
}

/// A token with its location in the source code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Token type
    pub kind: TokenKind,
    /// Literal payload
    pub value: Literal,
    /// Source line (1-indexed)
    pub line: u32,
    /// Name of the source the token came from
    pub file: Arc<str>,
}

impl Token {
    pub fn new(kind: TokenKind, value: Literal, line: u32, file: Arc<str>) -> Self {
        Self {
            kind,
            value,
            line,
            file,
        }
    }

    /// Checks if it is end of input
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_set_is_exact() {
        for word in KEYWORDS {
            assert!(is_keyword(word), "{word} should be reserved");
        }
        assert!(!is_keyword("fun"));
        assert!(!is_keyword("function"));
        assert!(!is_keyword("If"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_symbol_table() {
        let symbols: Vec<_> = "(){}+-*/\\=!,<>;[]"
            .chars()
            .map(TokenKind::from_symbol)
            .collect();
        assert!(symbols.iter().all(Option::is_some));
        assert_eq!(TokenKind::from_symbol(';'), Some(TokenKind::NewStatement));
        assert_eq!(TokenKind::from_symbol('.'), None);
        assert_eq!(TokenKind::from_symbol('"'), None);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(TokenKind::from_pair('<', '='), Some(TokenKind::LessThanOrEqual));
        assert_eq!(TokenKind::from_pair('=', '='), Some(TokenKind::DoubleEqual));
        assert_eq!(TokenKind::from_pair('=', '<'), None);
        assert_eq!(TokenKind::from_pair('+', '='), None);
    }

    #[test]
    fn test_display() {
        let file: Arc<str> = Arc::from("nil");
        let token = Token::new(
            TokenKind::Keyword,
            Literal::Text("func".into()),
            1,
            file.clone(),
        );
        assert_eq!(token.to_string(), "KEYWORD:func");

        let eof = Token::new(TokenKind::EndOfInput, Literal::None, 3, file);
        assert_eq!(eof.to_string(), "EOF:");
        assert!(eof.is_eof());
        assert_eq!(TokenKind::NewStatement.to_string(), "NEWINSTRUCTION");
    }
}
