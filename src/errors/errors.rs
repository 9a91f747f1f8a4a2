use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A recorded lexical fault together with where the scanner was when it
/// noticed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Every error this crate records belongs to the lexical phase.
    pub fn category(&self) -> &'static str {
        "Lexical"
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidSymbol { .. } => "InvalidSymbol",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::ConstantTableOverflow { .. } => "ConstantTableOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidSymbol { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("did you forget to close the comment with `*)`?"))
            }
            ErrorImpl::ConstantTableOverflow { value } => ErrorTip::Suggestion(format!(
                "constant `{}` does not fit, a program may use at most 500 distinct constants",
                value
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error at {}:{}: {}",
            self.category(),
            self.position.row,
            self.position.column,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid symbol: {symbol}")]
    InvalidSymbol { symbol: char },
    #[error("expected *) but end of input was found")]
    UnterminatedComment,
    #[error("constant table is full: {value:?}")]
    ConstantTableOverflow { value: String },
}
