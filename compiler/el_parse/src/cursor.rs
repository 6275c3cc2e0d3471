//! Token-level helpers on the parser.

use el_ir::{Span, Token, TokenKind};
use el_lexer::LexError;

use crate::{ParseError, Parser};

impl Parser<'_, '_> {
    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Move to the next token, returning the one just left.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let previous = self.current;
        self.current = self.lexer.next_token()?;
        Ok(previous)
    }

    /// Consume a token of `kind` or fail with "expected `what`".
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Error for the current token when `expected` was wanted.
    ///
    /// An illegal character is reported as the lex error it is.
    #[cold]
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        if let Some(err) = self.illegal_character() {
            return err;
        }
        ParseError::unexpected(expected, self.current.kind, self.current.span)
    }

    #[cold]
    pub(crate) fn trailing_error(&self) -> ParseError {
        if let Some(err) = self.illegal_character() {
            return err;
        }
        ParseError::trailing(self.current.kind, self.current.span)
    }

    fn illegal_character(&self) -> Option<ParseError> {
        if self.current.kind != TokenKind::Error {
            return None;
        }
        let ch = self.lexer.lexeme().chars().next().unwrap_or('\u{FFFD}');
        Some(LexError::illegal_character(self.current.span, ch).into())
    }
}
