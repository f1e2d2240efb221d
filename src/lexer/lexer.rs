use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

/// A stateful cursor over a decoded sequence of source characters.
///
/// Each call to [`Lexer::next`] skips insignificant input (whitespace and
/// line comments), then classifies and consumes exactly one token. The
/// source is decoded into code points up front so that multi-byte
/// characters count as single units for length and position accounting.
pub struct Lexer {
    chars: Vec<char>,
    idx: usize,
    line: usize,
    column: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            chars: source.chars().collect(),
            idx: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Returns the next token, `Ok(None)` once the input is exhausted, or a
    /// lexical error. The cursor position after an `Err` is unspecified and
    /// the stream should not be resumed.
    pub fn next(&mut self) -> Result<Option<Token>, Error> {
        self.skip_insignificant();

        let current = match self.peek() {
            Some(current) => current,
            None => return Ok(None),
        };

        // Position of the token's first character, before any of its own
        // characters are consumed.
        let line = self.line;
        let column = self.column;

        // Keywords and identifiers
        if current.is_alphabetic() {
            let (text, length) = self.capture_while(|c| c.is_alphanumeric() || c == '_');
            let kind = match KEYWORD_LOOKUP.get(text.as_str()) {
                Some(kind) => *kind,
                None => TokenKind::Identifier,
            };
            return Ok(Some(MK_TOKEN!(kind, text, length, line, column)));
        }

        // Numbers: maximal run of digits and dots. Not validated as a
        // well-formed number at this layer.
        if current.is_numeric() {
            let (text, length) = self.capture_while(|c| c.is_numeric() || c == '.');
            return Ok(Some(MK_TOKEN!(TokenKind::Number, text, length, line, column)));
        }

        // String literals, quotes consumed but excluded from the text
        if current == '"' {
            self.consume();
            let (text, length) = self.capture_while(|c| c != '"');

            if self.peek().is_none() {
                return Err(Error::new(ErrorImpl::UnterminatedString, self.position()));
            }
            self.consume();

            return Ok(Some(MK_TOKEN!(
                TokenKind::String,
                text,
                length + 2,
                line,
                column
            )));
        }

        // Declare-and-initialize needs two characters of lookahead before
        // falling through to the single-character table.
        if current == ':' && self.peek_at(1) == Some('=') {
            self.consume_n(2);
            return Ok(Some(MK_TOKEN!(
                TokenKind::DeclareInitialize,
                String::from(":="),
                2,
                line,
                column
            )));
        }

        let kind = match current {
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '=' => TokenKind::Assign,
            '_' => TokenKind::Underscore,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Dash,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character: current },
                    self.position(),
                ))
            }
        };
        self.consume();

        Ok(Some(MK_TOKEN!(
            kind,
            current.to_string(),
            1,
            line,
            column
        )))
    }

    /// Materializes the full token sequence by calling [`Lexer::next`]
    /// until end of input. Never diverges from repeated single calls.
    pub fn all(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];
        while let Some(token) = self.next()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.idx + n).copied()
    }

    /// Captures the maximal run of characters satisfying `predicate`,
    /// returning the captured text and its length in characters.
    fn capture_while(&mut self, predicate: impl Fn(char) -> bool) -> (String, usize) {
        let start = self.idx;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.consume();
        }

        let capture: String = self.chars[start..self.idx].iter().collect();
        (capture, self.idx - start)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    /// Advances past one character, maintaining line/column bookkeeping:
    /// newlines and carriage returns start a new line, tabs advance the
    /// column by 4, everything else advances it by 1.
    fn consume(&mut self) {
        let current = match self.peek() {
            Some(current) => current,
            None => return,
        };

        if current == '\n' || current == '\r' {
            self.line += 1;
            self.column = 1;
        } else if current == '\t' {
            self.column += 4;
        } else {
            self.column += 1;
        }

        self.idx += 1;
    }

    /// Consumes whitespace and line comments, interleaved, until neither
    /// applies. Produces no tokens.
    fn skip_insignificant(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.consume();
                }
                // TODO: support multi-line comments
                Some('/') if self.peek_at(1) == Some('/') => {
                    self.capture_while(|c| c != '\n');
                }
                _ => break,
            }
        }
    }
}
