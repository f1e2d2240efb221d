//! Statement-level parser module.
//!
//! A thin consumer of the token stream: it pulls tokens and checks the
//! token sequences of the three top-level declaration forms (package
//! clause, type declaration, function declaration). It builds no syntax
//! tree and performs no semantic analysis.

pub mod parser;
