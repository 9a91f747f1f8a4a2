//! Error types for lexical analysis.
//!
//! The scanner never aborts on bad input. Every fault it notices becomes an
//! [`errors::Error`] carrying:
//!
//! - the specific [`errors::ErrorImpl`] variant and its message
//! - the row and column the scanner was at when it noticed the fault
//! - an optional [`errors::ErrorTip`] for the diagnostic printer

pub mod errors;

#[cfg(test)]
mod tests;
