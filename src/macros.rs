//! Utility macros for the lexer.
//!
//! - `MK_LEXEME!` - Creates a Lexeme instance at a given position

/// Creates a Lexeme instance.
///
/// # Arguments
///
/// * `$value` - The lexeme's text
/// * `$code` - The resolved numeric code
/// * `$position` - The [`Position`](crate::Position) of its first character
///
/// # Example
///
/// ```ignore
/// let lexeme = MK_LEXEME!(String::from(":="), 301, symbol.position);
/// ```
#[macro_export]
macro_rules! MK_LEXEME {
    ($value:expr, $code:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        Lexeme {
            value: $value,
            code: $code,
            row: position.row,
            column: position.column,
        }
    }};
}
