//! Utility macros for the lexer.
//!
//! This module defines the `MK_TOKEN!` helper macro used to build `Token`
//! values without repeating the full struct literal at every emit site.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text
/// * `$length` - Characters consumed to produce the token
/// * `$line` - 1-based line of the token's first character
/// * `$column` - 1-based column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 2, 1, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $length:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            text: $text,
            length: $length,
            line: $line,
            column: $column,
        }
    };
}
