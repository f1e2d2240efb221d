//! Error types and error handling for the tokenizer pipeline.
//!
//! This module defines the error types used by the lexer and the parser:
//!
//! - Error structure with line/column position information
//! - Specific error variants for lexical and parse failures
//! - Error formatting and display functionality

pub mod errors;
