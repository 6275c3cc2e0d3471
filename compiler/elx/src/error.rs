//! Facade error type.

use el_eval::{EvalContext, EvalError};
use el_lexer::LexError;
use el_parse::ParseError;

use crate::template::TemplateError;

/// Any failure between source text and a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl Error {
    pub fn message_key(&self) -> &'static str {
        match self {
            Error::Lex(e) => e.message_key(),
            Error::Parse(e) => e.message_key(),
            Error::Eval(e) => e.message_key(),
            Error::Template(e) => e.message_key(),
        }
    }

    pub fn message_args(&self) -> Vec<String> {
        match self {
            Error::Lex(e) => e.message_args(),
            Error::Parse(e) => e.message_args(),
            Error::Eval(e) => e.message_args(),
            Error::Template(e) => e.message_args(),
        }
    }

    /// Message rendered by the context's message source.
    pub fn localized(&self, ctx: &dyn EvalContext) -> String {
        ctx.get_message(self.message_key(), &self.message_args())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
