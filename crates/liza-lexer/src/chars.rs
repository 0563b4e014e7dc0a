//! Character classes and the escape table used by the lexer.

use unicode_xid::UnicodeXID;

/// Value read past the end of the buffer.
pub const SENTINEL: char = '\0';

/// Letters start identifiers. `_` counts as a letter.
pub fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_xid_start()
}

/// Continues an identifier: a letter, or an `XID_Continue` mark that is not
/// numeric, so combining accents stay attached but digits never do.
pub fn is_word_continue(ch: char) -> bool {
    is_letter(ch) || (ch.is_xid_continue() && !ch.is_numeric())
}

/// ASCII decimal digits only.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Looks up the code point following a backslash inside a string literal.
pub fn escape(ch: char) -> Option<char> {
    match ch {
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{000B}'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}
