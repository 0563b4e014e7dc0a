//! End-to-end tests for the Liza tokenizer
//!
//! Helpers that drive the lexer the way a parser front end would:
//! Source file -> Lexer -> tokens + rendered diagnostics

use std::io;
use std::path::Path;

use liza_error::{DiagnosticRenderer, SourceFile};
use liza_lexer::{Lexed, Lexer, Literal, TokenKind};

/// Result of lexing a Liza source
#[derive(Debug)]
pub struct LexResult {
    /// Tokens and errors from the lexer
    pub lexed: Lexed,
    /// Diagnostics rendered without colors
    pub rendered: String,
}

impl LexResult {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.lexed.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn values(&self) -> Vec<Literal> {
        self.lexed.tokens.iter().map(|t| t.value.clone()).collect()
    }
}

fn lex_source(file: &SourceFile) -> LexResult {
    let lexed = Lexer::new(&file.source, file.name.as_str()).tokenize();
    let renderer = DiagnosticRenderer::new(file).without_colors();
    let rendered = lexed.diagnostics().render(&renderer);
    LexResult { lexed, rendered }
}

/// Lexes in-memory source under the name `test.lz`
pub fn lex(source: &str) -> LexResult {
    lex_source(&SourceFile::new("test.lz", source))
}

/// Reads and lexes a file from disk
pub fn lex_file(path: &Path) -> io::Result<LexResult> {
    let source = std::fs::read_to_string(path)?;
    Ok(lex_source(&SourceFile::new(path.display().to_string(), source)))
}

/// Asserts that source lexes without any error or warning
pub fn assert_lexes_cleanly(source: &str) {
    let result = lex(source);
    if !result.lexed.errors.is_empty() {
        panic!(
            "Expected source to lex cleanly, but got:\n{}",
            result.rendered
        );
    }
}

/// Asserts the exact token kinds produced for a source
pub fn assert_kinds(source: &str, expected: &[TokenKind]) {
    let result = lex(source);
    if result.kinds() != expected {
        panic!(
            "Token kinds differ for {:?}\n  expected: {:?}\n  actual:   {:?}",
            source,
            expected,
            result.kinds()
        );
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use TokenKind::*;

    // =========================================
    // Whole programs
    // =========================================

    #[test]
    fn test_empty_program() {
        assert_kinds("", &[EndOfInput]);
    }

    #[test]
    fn test_hello_world() {
        let source = "func main(){
		string helloworld = \"Hello World\"
		print (helloworld)
	}";
        assert_lexes_cleanly(source);
        assert_kinds(
            source,
            &[
                Keyword, Identifier, OpenParen, CloseParen, OpenBrace, NewStatement,
                Keyword, Identifier, Equal, String, NewStatement,
                Identifier, OpenParen, Identifier, CloseParen, NewStatement,
                CloseBrace, EndOfInput,
            ],
        );
        let result = lex(source);
        assert_eq!(result.values()[9], Literal::Text("Hello World".into()));
    }

    #[test]
    fn test_control_flow() {
        let source = "func max(int a, int b) int {
    if a >= b { return a } else { return b }
}
for i = 0; i <= 10; i = i + 1 { x[i] = i * 2.5 / 1 - 0 }";
        assert_lexes_cleanly(source);
        let result = lex(source);
        let kinds = result.kinds();
        assert!(kinds.contains(&MoreThanOrEqual));
        assert!(kinds.contains(&LessThanOrEqual));
        assert!(kinds.contains(&OpenBracket));
        assert!(kinds.contains(&Float));
        assert_eq!(kinds.iter().filter(|k| **k == Keyword).count(), 9);
        // 3 line feeds + 2 semicolons
        assert_eq!(kinds.iter().filter(|k| **k == NewStatement).count(), 5);
    }

    #[test]
    fn test_comparisons_never_split() {
        assert_kinds(
            "a==b!=c<=d>=e<f>g=h!i",
            &[
                Identifier, DoubleEqual, Identifier, NotEqual, Identifier, LessThanOrEqual,
                Identifier, MoreThanOrEqual, Identifier, LessThan, Identifier, MoreThan,
                Identifier, Equal, Identifier, Not, Identifier, EndOfInput,
            ],
        );
    }

    // =========================================
    // Line tracking
    // =========================================

    #[test]
    fn test_lines_after_multiline_string() {
        let result = lex("string s = \"first\nsecond\nthird\"\nbool ok");
        let lines: Vec<_> = result
            .lexed
            .tokens
            .iter()
            .map(|t| (t.kind, t.line))
            .collect();
        assert_eq!(
            lines,
            vec![
                (Keyword, 1),
                (Identifier, 1),
                (Equal, 1),
                (String, 1),
                (NewStatement, 3),
                (Keyword, 4),
                (Identifier, 4),
                (EndOfInput, 4),
            ]
        );
    }

    #[test]
    fn test_error_line_after_multiline_string() {
        let result = lex("\"a\nb\nc\" ?");
        assert_eq!(result.lexed.errors.len(), 1);
        assert_eq!(result.lexed.errors[0].line(), 3);
        assert!(result.rendered.contains("invalid character '?' on line 3"));
        assert!(result.rendered.contains("--> test.lz:3:4"));
    }

    // =========================================
    // Error recovery
    // =========================================

    #[test]
    fn test_unterminated_string_reports_opening_line() {
        let result = lex("int x = 1\nstring s = \"never closed\nint y = 2\n");
        assert!(!result.kinds().contains(&String));
        assert_eq!(result.kinds().last(), Some(&EndOfInput));
        assert_eq!(result.lexed.errors.len(), 1);
        assert_eq!(result.lexed.errors[0].line(), 2);
        assert!(result
            .rendered
            .contains("error[EL002]: missing closing quote for string starting on line 2"));
        assert!(result.rendered.contains("--> test.lz:2:12"));
    }

    #[test]
    fn test_errors_keep_source_order() {
        let result = lex("@\n99999999999999999999\n\"\\z\"\n~");
        let lines: Vec<_> = result.lexed.errors.iter().map(|e| e.line()).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
        assert_eq!(
            result.kinds(),
            vec![
                Invalid, NewStatement, Invalid, NewStatement, String, NewStatement, Invalid,
                EndOfInput,
            ]
        );
        assert!(result.rendered.contains("warning[EL004]"));
    }

    #[test]
    fn test_every_character_is_accounted_for() {
        // Each non-blank character is either part of a token or an Invalid token
        let source = "a#b$c%d&e|f^g~h`i:j?k.l'm";
        let result = lex(source);
        let invalid = result.kinds().iter().filter(|k| **k == Invalid).count();
        let words = result.kinds().iter().filter(|k| **k == Identifier).count();
        assert_eq!(invalid + words, source.chars().count());
        assert_eq!(result.lexed.errors.len(), invalid);
    }

    // =========================================
    // File input
    // =========================================

    #[test]
    fn test_lex_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"func main(){\n\treturn 0\n}\n").unwrap();

        let result = lex_file(file.path()).unwrap();
        assert!(result.lexed.errors.is_empty());
        let name = file.path().display().to_string();
        assert!(result.lexed.tokens.iter().all(|t| *t.file == *name));
        assert_eq!(result.lexed.tokens.last().map(|t| t.line), Some(4));
    }

    #[test]
    fn test_lex_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(lex_file(&dir.path().join("missing.lz")).is_err());
    }

    // =========================================
    // Independent documents
    // =========================================

    #[test]
    fn test_documents_lex_on_separate_threads() {
        let sources = ["int a = 1", "float b = 2.5", "string c = \"x\"", "bool d"];
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                let source = source.to_string();
                std::thread::spawn(move || Lexer::new(&source, "thread.lz").tokenize())
            })
            .collect();

        for (handle, source) in handles.into_iter().zip(sources) {
            let lexed = handle.join().unwrap();
            assert_eq!(lexed, Lexer::new(source, "thread.lz").tokenize());
        }
    }
}
