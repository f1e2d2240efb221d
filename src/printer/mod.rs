//! Token table printer.
//!
//! Pure presentation over the token stream: one fixed-width table row per
//! token, written to any `io::Write`.

pub mod printer;
