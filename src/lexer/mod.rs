//! Lexical analysis for SIGNAL sources.
//!
//! A single left-to-right pass with one character of lookahead turns a
//! character stream into coded lexemes. It handles:
//!
//! - Classification of every character (whitespace, digit, letter, ...)
//! - Row/column tracking for lexemes and diagnostics
//! - Keywords, identifiers and unsigned integer constants
//! - Single and double delimiters with maximal munch
//! - `(* ... *)` comments
//! - Deduplicating identifier and constant tables with stable codes

pub mod classifier;
pub mod lexer;
pub mod source;
pub mod tables;
pub mod tokens;
