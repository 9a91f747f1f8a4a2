use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::errors::errors::ErrorImpl;

use super::classifier::COMMENT_OPENER;

// Code space layout. Single delimiters use their ASCII value (< 256), the
// other ranges start one above their base.
pub const DOUBLE_DELIMITER_BASE: u32 = 300;
pub const KEYWORD_BASE: u32 = 400;
pub const CONSTANT_BASE: u32 = 500;
pub const IDENTIFIER_BASE: u32 = 1000;

const SINGLE_DELIMITER_CHARS: &[char] = &[
    COMMENT_OPENER, ')', ';', ':', ',', '.', '=', '+', '-', '*', '/', '<', '>', '$', '[', ']',
    '#',
];

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert("program", 401);
        map.insert("begin", 402);
        map.insert("end", 403);
        map.insert("procedure", 404);
        map.insert("label", 405);
        map.insert("goto", 406);
        map.insert("return", 407);
        map.insert("const", 408);
        map.insert("var", 409);
        map.insert("if", 410);
        map.insert("then", 411);
        map.insert("else", 412);
        map.insert("endif", 413);
        map.insert("while", 414);
        map.insert("do", 415);
        map.insert("endwhile", 416);
        map.insert("loop", 417);
        map.insert("endloop", 418);
        map.insert("case", 419);
        map.insert("of", 420);
        map.insert("endcase", 421);
        map.insert("integer", 422);
        map.insert("float", 423);
        map.insert("signal", 424);
        map.insert("complex", 425);
        map.insert("blockfloat", 426);
        map.insert("ext", 427);
        map.insert("deffunc", 428);
        map.insert("link", 429);
        map.insert("in", 430);
        map.insert("out", 431);
        map.insert("read", 432);
        map.insert("write", 433);
        map
    };

    pub static ref SINGLE_DELIMITERS: HashMap<char, u32> = SINGLE_DELIMITER_CHARS
        .iter()
        .map(|&c| (c, c as u32))
        .collect();

    pub static ref DOUBLE_DELIMITERS: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert(":=", 301);
        map.insert("<=", 302);
        map.insert(">=", 303);
        map.insert("<>", 304);
        map.insert("..", 305);
        map.insert("$)", 306);
        map
    };
}

/// Selects one of the two dynamically growing symbol tables.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TableKind {
    Identifier,
    Constant,
}

impl TableKind {
    pub fn base(&self) -> u32 {
        match self {
            TableKind::Identifier => IDENTIFIER_BASE,
            TableKind::Constant => CONSTANT_BASE,
        }
    }

    /// Number of distinct entries the table can hold before its codes would
    /// run into the next range. `None` means bounded only by `u32`.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            TableKind::Identifier => None,
            TableKind::Constant => Some((IDENTIFIER_BASE - CONSTANT_BASE) as usize),
        }
    }
}

/// Insertion-ordered, deduplicating text to code mapping.
///
/// The n-th distinct entry (starting at 1) gets `base + n`. Entries are
/// never removed, so a text keeps its first code for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    kind: TableKind,
    entries: IndexMap<String, u32>,
}

impl SymbolTable {
    pub fn new(kind: TableKind) -> Self {
        SymbolTable {
            kind,
            entries: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn base(&self) -> u32 {
        self.kind.base()
    }

    /// Returns the code of `text`, inserting it first if it is new.
    pub fn resolve(&mut self, text: &str) -> Result<u32, ErrorImpl> {
        if let Some(code) = self.entries.get(text) {
            return Ok(*code);
        }

        let len = self.entries.len();
        if self.kind.capacity().is_some_and(|cap| len >= cap) {
            return Err(ErrorImpl::ConstantTableOverflow {
                value: text.to_string(),
            });
        }

        let code = self.base() + len as u32 + 1;
        self.entries.insert(text.to_string(), code);
        Ok(code)
    }

    pub fn get(&self, text: &str) -> Option<u32> {
        self.entries.get(text).copied()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Entries in the order they were first seen, which is also code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(text, code)| (text.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
