use crate::Position;

use super::{
    classifier::{classify, fold},
    tokens::Symbol,
};

/// Anything that hands out characters one at a time.
///
/// Every `Iterator<Item = char>` is a source, so `"text".chars()` works
/// directly.
pub trait CharSource {
    fn read_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn read_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Outcome of a single read.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Read {
    Symbol(Symbol),
    EndOfInput,
}

/// Wraps a [`CharSource`], folding case, classifying and keeping track of
/// the row and column of the last character read.
pub struct Cursor<S> {
    source: S,
    row: u32,
    column: u32,
}

impl<S: CharSource> Cursor<S> {
    pub fn new(source: S) -> Self {
        Cursor {
            source,
            row: 1,
            column: 0,
        }
    }

    pub fn read(&mut self) -> Read {
        let Some(raw) = self.source.read_char() else {
            return Read::EndOfInput;
        };

        let value = fold(raw);
        if value == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Read::Symbol(Symbol {
            value,
            category: classify(value),
            position: self.position(),
        })
    }

    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            column: self.column,
        }
    }
}
