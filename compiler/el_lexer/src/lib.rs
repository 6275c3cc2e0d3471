//! Lexer for EL expressions.
//!
//! A hand-written pull lexer: the parser calls [`Lexer::next_token`] and
//! reads the decoded value of the current token through accessors.
//!
//! # Module Structure
//!
//! - `cursor`: character cursor over the source text
//! - `keywords`: const, length-bucketed reserved-word table
//! - `cook_escape`: escape processing for both string dialects
//! - `number`: integer widening and floating decoding
//! - `lex_error`: structured lexer errors
//! - `lexer`: the `Lexer` itself
//!
//! # Example
//!
//! ```
//! use el_ir::TokenKind;
//! use el_lexer::Lexer;
//!
//! let mut lexer = Lexer::new("a.b + 1");
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Ident);
//! assert_eq!(lexer.lexeme(), "a");
//! ```

mod cook_escape;
mod cursor;
mod keywords;
mod lex_error;
mod lexer;
pub mod number;

use el_ir::{Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{is_ident_continue, is_ident_start, is_whitespace, Lexer};

/// Lex `source` to the end, returning every token including the final `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}

/// Look up a reserved word.
pub fn keyword(text: &str) -> Option<TokenKind> {
    keywords::lookup(text)
}
