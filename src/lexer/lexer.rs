use log::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_LEXEME,
};

use super::{
    classifier::{Category, COMMENT_CLOSER, COMMENT_OPENER, COMMENT_STAR},
    source::{CharSource, Cursor, Read},
    tables::{SymbolTable, TableKind, DOUBLE_DELIMITERS, KEYWORDS, SINGLE_DELIMITERS},
    tokens::{Lexeme, Symbol},
};

/// Everything one pass over a source produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexResult {
    pub lexemes: Vec<Lexeme>,
    pub identifiers: SymbolTable,
    pub constants: SymbolTable,
    pub errors: Vec<Error>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Outcome of a single scan iteration. A `None` lexeme means nothing is
/// emitted for it (comments, recorded errors, trailing whitespace).
enum Step {
    Continue(Option<Lexeme>),
    Finish(Option<Lexeme>),
}

pub struct Lexer<S> {
    cursor: Cursor<S>,
    lookahead: Option<Symbol>,
    lexemes: Vec<Lexeme>,
    identifiers: SymbolTable,
    constants: SymbolTable,
    errors: Vec<Error>,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Lexer<S> {
        Lexer {
            cursor: Cursor::new(source),
            lookahead: None,
            lexemes: vec![],
            identifiers: SymbolTable::new(TableKind::Identifier),
            constants: SymbolTable::new(TableKind::Constant),
            errors: vec![],
        }
    }

    /// Scans until the source is exhausted (or a comment never closes).
    pub fn run(mut self) -> LexResult {
        loop {
            match self.step() {
                Step::Continue(lexeme) => self.push(lexeme),
                Step::Finish(lexeme) => {
                    self.push(lexeme);
                    break;
                }
            }
        }

        debug!(
            "lexical pass done: {} lexemes, {} identifiers, {} constants, {} errors",
            self.lexemes.len(),
            self.identifiers.len(),
            self.constants.len(),
            self.errors.len()
        );

        LexResult {
            lexemes: self.lexemes,
            identifiers: self.identifiers,
            constants: self.constants,
            errors: self.errors,
        }
    }

    fn push(&mut self, lexeme: Option<Lexeme>) {
        if let Some(lexeme) = lexeme {
            trace!("{}", lexeme);
            self.lexemes.push(lexeme);
        }
    }

    fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        warn!("{}", error);
        self.errors.push(error);
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut SymbolTable {
        match kind {
            TableKind::Identifier => &mut self.identifiers,
            TableKind::Constant => &mut self.constants,
        }
    }

    fn next_symbol(&mut self) -> Read {
        match self.lookahead.take() {
            Some(symbol) => Read::Symbol(symbol),
            None => self.cursor.read(),
        }
    }

    fn read_value(&mut self) -> Option<char> {
        match self.cursor.read() {
            Read::Symbol(symbol) => Some(symbol.value),
            Read::EndOfInput => None,
        }
    }

    fn step(&mut self) -> Step {
        let mut read = self.next_symbol();
        let symbol = loop {
            match read {
                Read::Symbol(symbol) if symbol.category == Category::Whitespace => {
                    read = self.cursor.read()
                }
                Read::Symbol(symbol) => break symbol,
                Read::EndOfInput => return Step::Finish(None),
            }
        };

        match symbol.category {
            Category::Digit => self.scan_constant(symbol),
            Category::Letter => self.scan_word(symbol),
            Category::CommentOpener => self.scan_comment(symbol),
            Category::Delimiter => self.scan_delimiter(symbol),
            Category::Invalid => {
                let position = self.cursor.position();
                self.error(ErrorImpl::InvalidSymbol { symbol: symbol.value }, position);
                Step::Continue(None)
            }
            Category::Whitespace => unreachable!("whitespace is skipped before dispatch"),
        }
    }

    /// Appends characters to `first` while `continues` holds. The character
    /// that breaks the run becomes the lookahead. Returns the text and
    /// whether the input ran out.
    fn accumulate(&mut self, first: Symbol, continues: fn(Category) -> bool) -> (String, bool) {
        let mut value = String::from(first.value);
        loop {
            match self.cursor.read() {
                Read::Symbol(symbol) if continues(symbol.category) => value.push(symbol.value),
                Read::Symbol(symbol) => {
                    self.lookahead = Some(symbol);
                    return (value, false);
                }
                Read::EndOfInput => return (value, true),
            }
        }
    }

    fn resolve(&mut self, kind: TableKind, value: String, position: Position) -> Option<Lexeme> {
        match self.table_mut(kind).resolve(&value) {
            Ok(code) => Some(MK_LEXEME!(value, code, position)),
            Err(error_impl) => {
                self.error(error_impl, position);
                None
            }
        }
    }

    fn scan_constant(&mut self, first: Symbol) -> Step {
        let (value, exhausted) = self.accumulate(first, |category| category == Category::Digit);
        let lexeme = self.resolve(TableKind::Constant, value, first.position);
        finish_if(exhausted, lexeme)
    }

    fn scan_word(&mut self, first: Symbol) -> Step {
        let (value, exhausted) = self.accumulate(first, |category| {
            matches!(category, Category::Letter | Category::Digit)
        });

        let lexeme = if let Some(&code) = KEYWORDS.get(value.as_str()) {
            Some(MK_LEXEME!(value, code, first.position))
        } else {
            self.resolve(TableKind::Identifier, value, first.position)
        };

        finish_if(exhausted, lexeme)
    }

    fn scan_comment(&mut self, opener: Symbol) -> Step {
        match self.cursor.read() {
            Read::Symbol(next) if next.value == COMMENT_STAR => self.skip_comment(opener.position),
            Read::Symbol(next) => {
                self.lookahead = Some(next);
                Step::Continue(Some(single_delimiter(opener)))
            }
            Read::EndOfInput => Step::Finish(Some(single_delimiter(opener))),
        }
    }

    /// Skips everything up to and including the closing `*)`. The `*` of the
    /// opening `(*` does not count towards the closer.
    fn skip_comment(&mut self, start: Position) -> Step {
        let mut current = COMMENT_OPENER;
        while current != COMMENT_CLOSER {
            while current != COMMENT_STAR {
                match self.read_value() {
                    Some(value) => current = value,
                    None => return self.unterminated_comment(),
                }
            }
            match self.read_value() {
                Some(value) => current = value,
                None => return self.unterminated_comment(),
            }
        }

        debug!("skipped comment opened at {}", start);
        Step::Continue(None)
    }

    fn unterminated_comment(&mut self) -> Step {
        let position = self.cursor.position();
        self.error(ErrorImpl::UnterminatedComment, position);
        Step::Finish(None)
    }

    fn scan_delimiter(&mut self, first: Symbol) -> Step {
        match self.cursor.read() {
            Read::Symbol(second) => {
                let pair: String = [first.value, second.value].iter().collect();
                if let Some(&code) = DOUBLE_DELIMITERS.get(pair.as_str()) {
                    Step::Continue(Some(MK_LEXEME!(pair, code, first.position)))
                } else {
                    self.lookahead = Some(second);
                    Step::Continue(Some(single_delimiter(first)))
                }
            }
            Read::EndOfInput => Step::Finish(Some(single_delimiter(first))),
        }
    }
}

fn finish_if(exhausted: bool, lexeme: Option<Lexeme>) -> Step {
    if exhausted {
        Step::Finish(lexeme)
    } else {
        Step::Continue(lexeme)
    }
}

fn single_delimiter(symbol: Symbol) -> Lexeme {
    let code = SINGLE_DELIMITERS[&symbol.value];
    MK_LEXEME!(symbol.value.to_string(), code, symbol.position)
}

/// Runs one complete lexical pass over `source`.
pub fn tokenize<S: CharSource>(source: S) -> LexResult {
    Lexer::new(source).run()
}

pub fn tokenize_str(source: &str) -> LexResult {
    tokenize(source.chars())
}
