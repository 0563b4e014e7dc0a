//! liza-error - Diagnostics system for the Liza language
//!
//! This crate provides structures for reporting compilation errors
//! in a clear and detailed way, similar to the Rust compiler style.
//!
//! # Example
//!
//! ```rust
//! use liza_error::{Diagnostic, DiagnosticRenderer, ErrorCode, SourceFile};
//! use liza_error::span::{Position, Span};
//!
//! let file = SourceFile::new("example.lz", "int x = 10 $");
//!
//! let diagnostic = Diagnostic::error("invalid character '$' on line 1")
//!     .with_code(ErrorCode::INVALID_CHAR)
//!     .with_label(Span::point(Position::new(1, 12)), "not a valid token");
//!
//! let renderer = DiagnosticRenderer::new(&file);
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceFile};
pub use span::{Position, Span};

/// Collection of diagnostics accumulated while processing a file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics against their source file
    pub fn render(&self, renderer: &DiagnosticRenderer<'_>) -> String {
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_warnings_are_not_errors() {
        let diagnostics: Diagnostics = vec![
            Diagnostic::warning("unknown escape"),
            Diagnostic::warning("another one"),
        ]
        .into_iter()
        .collect();

        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 0);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_render_joins_diagnostics() {
        let file = SourceFile::new("a.lz", "x");
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::error("first"));
        diagnostics.push(Diagnostic::error("second"));

        let renderer = DiagnosticRenderer::new(&file).without_colors();
        assert_eq!(diagnostics.render(&renderer), "error: first\n\nerror: second\n");
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 2);
    }
}
