//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for the consumers. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column position tracking across newlines and tabs
//! - Whitespace and line comment skipping
//! - Two-character lookahead for the `:=` operator

pub mod lexer;
pub mod tokens;
