use std::io::{self, Write};

use crate::lexer::tokens::Token;

/// Writes one table row for `token`.
pub fn print_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    writeln!(
        out,
        "| Token {:>20} | Length {:>3} | Line {:>4} | Pos {:>3} | Value {}",
        token.kind.to_string(),
        token.length,
        token.line,
        token.column,
        token.text
    )
}

/// Writes one table row per token.
pub fn print_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        print_token(out, token)?;
    }
    Ok(())
}
