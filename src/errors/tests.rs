//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidSymbol { symbol: '@' },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "InvalidSymbol");
    assert_eq!(error.category(), "Lexical");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(42, 9));

    assert_eq!(error.get_position(), &Position::new(42, 9));
    assert_eq!(error.row(), 42);
    assert_eq!(error.column(), 9);
}

#[test]
fn test_error_messages() {
    let invalid = Error::new(ErrorImpl::InvalidSymbol { symbol: '?' }, Position::new(1, 1));
    let comment = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 1));
    let overflow = Error::new(
        ErrorImpl::ConstantTableOverflow {
            value: "777".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(invalid.message(), "invalid symbol: ?");
    assert_eq!(comment.message(), "expected *) but end of input was found");
    assert_eq!(overflow.message(), "constant table is full: \"777\"");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::InvalidSymbol { symbol: '%' }, Position::new(2, 5));

    assert_eq!(error.to_string(), "Lexical error at 2:5: invalid symbol: %");
}

#[test]
fn test_unterminated_comment_error() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(0, 0));

    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_constant_table_overflow_error() {
    let error = Error::new(
        ErrorImpl::ConstantTableOverflow {
            value: "12".to_string(),
        },
        Position::new(0, 0),
    );

    assert_eq!(error.get_error_name(), "ConstantTableOverflow");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::InvalidSymbol { symbol: '@' }, Position::new(0, 0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::new(0, 0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("*)")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
