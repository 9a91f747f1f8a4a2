use std::fmt::Display;

use crate::Position;

use super::{
    classifier::Category,
    tables::{
        CONSTANT_BASE, DOUBLE_DELIMITER_BASE, IDENTIFIER_BASE, KEYWORD_BASE,
    },
};

/// One character read from the source, tagged with its category and the
/// position it was read at.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Symbol {
    pub value: char,
    pub category: Category,
    pub position: Position,
}

/// What a lexeme's code says about it. Derived purely from the code range.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexemeKind {
    Delimiter,
    DoubleDelimiter,
    Keyword,
    Constant,
    Identifier,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Lexeme {
    pub value: String,
    pub code: u32,
    pub row: u32,
    pub column: u32,
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexeme {{ value: {}, code: {}, at: {}:{} }}",
            self.value, self.code, self.row, self.column
        )
    }
}

impl Lexeme {
    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            column: self.column,
        }
    }

    pub fn kind(&self) -> LexemeKind {
        match self.code {
            code if code > IDENTIFIER_BASE => LexemeKind::Identifier,
            code if code > CONSTANT_BASE => LexemeKind::Constant,
            code if code > KEYWORD_BASE => LexemeKind::Keyword,
            code if code > DOUBLE_DELIMITER_BASE => LexemeKind::DoubleDelimiter,
            _ => LexemeKind::Delimiter,
        }
    }
}
