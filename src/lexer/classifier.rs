/// The category a single (already case-folded) character falls into.
///
/// Exactly one category applies to every `char`. Digits and letters are
/// disjoint even though identifiers may continue with digits.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Whitespace,
    Digit,
    Letter,
    CommentOpener,
    Delimiter,
    Invalid,
}

/// Character that opens a comment when followed by [`COMMENT_STAR`].
pub const COMMENT_OPENER: char = '(';
pub const COMMENT_STAR: char = '*';
pub const COMMENT_CLOSER: char = ')';

pub fn classify(c: char) -> Category {
    match c {
        ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' => Category::Whitespace,
        '0'..='9' => Category::Digit,
        'a'..='z' => Category::Letter,
        COMMENT_OPENER => Category::CommentOpener,
        ')' | ';' | ':' | ',' | '.' | '=' | '+' | '-' | '*' | '/' | '<' | '>' | '$' | '['
        | ']' | '#' => Category::Delimiter,
        _ => Category::Invalid,
    }
}

/// Folds a raw character the way the scanner sees it.
///
/// Only ASCII letters fold; anything outside ASCII is left alone and ends
/// up classified as [`Category::Invalid`].
pub fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}
