use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// The statement-level parser over a materialized token stream.
///
/// Tracks the current position in the token vector and provides checked
/// token consumption. Unknown top-level tokens are skipped; only the three
/// declaration forms are validated.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the current token without advancing.
    fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advances to the next token and returns the consumed one.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    /// Consumes the current token if it has the expected kind, otherwise
    /// returns an error pointing at the offending token.
    fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        let token = match self.advance() {
            Some(token) => token,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    self.end_position(),
                ))
            }
        };

        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.text.clone(),
                    message: String::from(message),
                },
                self.position_of(&token),
            ));
        }

        Ok(token)
    }

    fn position_of(&self, token: &Token) -> Position {
        Position {
            line: token.line,
            column: token.column,
            file: Rc::clone(&self.file),
        }
    }

    fn end_position(&self) -> Position {
        match self.tokens.last() {
            Some(token) => self.position_of(token),
            None => Position {
                line: 1,
                column: 1,
                file: Rc::clone(&self.file),
            },
        }
    }

    /// Skips a balanced `open`/`close` delimiter run, the opening token
    /// included. Fails if the input ends before the run closes.
    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> Result<(), Error> {
        self.expect(open, "expected an opening delimiter")?;

        let mut depth = 1;
        while depth > 0 {
            let token = match self.advance() {
                Some(token) => token,
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedEndOfInput,
                        self.end_position(),
                    ))
                }
            };

            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
            }
        }

        Ok(())
    }

    /// `package` Identifier
    fn parse_package_clause(&mut self) -> Result<(), Error> {
        self.advance();
        self.expect(
            TokenKind::Identifier,
            "expected an identifier after `package`",
        )?;
        Ok(())
    }

    /// `type` Identifier (`struct` | `interface`) `{` ... `}`
    fn parse_type_declaration(&mut self) -> Result<(), Error> {
        self.advance();
        self.expect(TokenKind::Identifier, "expected an identifier after `type`")?;

        let token = match self.advance() {
            Some(token) => token,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    self.end_position(),
                ))
            }
        };

        match token.kind {
            TokenKind::Struct | TokenKind::Interface => {}
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.text.clone(),
                        message: String::from("expected `struct` or `interface`"),
                    },
                    self.position_of(&token),
                ))
            }
        }

        self.skip_balanced(TokenKind::OpenCurly, TokenKind::CloseCurly)
    }

    /// `func` Identifier `(` ... `)` [return type] [`{` ... `}`]
    fn parse_function_declaration(&mut self) -> Result<(), Error> {
        self.advance();
        self.expect(TokenKind::Identifier, "expected an identifier after `func`")?;
        self.skip_balanced(TokenKind::OpenParen, TokenKind::CloseParen)?;

        // Optional return type
        if let Some(TokenKind::Int) | Some(TokenKind::Identifier) =
            self.current_token().map(|token| token.kind)
        {
            self.advance();
        }

        // Optional body
        if self.current_token().map(|token| token.kind) == Some(TokenKind::OpenCurly) {
            self.skip_balanced(TokenKind::OpenCurly, TokenKind::CloseCurly)?;
        }

        Ok(())
    }
}

/// Walks the token stream and validates the three top-level declaration
/// forms, skipping everything else.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<(), Error> {
    let mut parser = Parser::new(tokens, file);

    while !parser.at_eof() {
        match parser.current_token().map(|token| token.kind) {
            Some(TokenKind::Package) => parser.parse_package_clause()?,
            Some(TokenKind::Type) => parser.parse_type_declaration()?,
            Some(TokenKind::Func) => parser.parse_function_declaration()?,
            _ => {
                parser.advance();
            }
        }
    }

    Ok(())
}
