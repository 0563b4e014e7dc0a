//! Span - Source code location
//!
//! A Span represents a region in the source code, used to
//! report errors with precision.

use serde::Serialize;

/// Represents a position in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column in code points (1-indexed)
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Represents a region in the source code (start to end, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a span covering a single code point
    pub fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: Position::new(pos.line, pos.column + 1),
        }
    }

    /// Creates a single-line span of `width` code points
    pub fn with_width(start: Position, width: u32) -> Self {
        Self {
            start,
            end: Position::new(start.line, start.column + width.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_and_width() {
        let pos = Position::new(3, 7);
        assert_eq!(Span::point(pos).end, Position::new(3, 8));
        assert_eq!(Span::with_width(pos, 4).end, Position::new(3, 11));
        // zero width still underlines one column
        assert_eq!(Span::with_width(pos, 0).end, Position::new(3, 8));
    }
}
