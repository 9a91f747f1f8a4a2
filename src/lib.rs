#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

pub use lexer::lexer::{tokenize, tokenize_str, LexResult};

/// Row and column of a character. Rows start at 1. The first character of
/// the source is column 1; a line break itself is column 1 of the row it
/// opens, so the first character after it is column 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Returns the text of line `row` (1-based) without its line break.
pub fn get_line_at_row(source: &str, row: u32) -> Option<&str> {
    if row == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(row as usize - 1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
