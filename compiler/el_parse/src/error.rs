//! Parse error types.
//!
//! A `ParseError` carries what went wrong (`kind`), where (`span`), and
//! optionally what the parser was working on (`context`), for
//! "while parsing a method call" style messages.

use el_ir::{Span, TokenKind};
use el_lexer::LexError;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Expression,
    Ternary,
    Parenthesized,
    FunctionCall,
    MethodCall,
    IndexExpression,
    TypeReference,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::Expression => "an expression",
            ErrorContext::Ternary => "a conditional expression",
            ErrorContext::Parenthesized => "a parenthesized expression",
            ErrorContext::FunctionCall => "a function call",
            ErrorContext::MethodCall => "a method call",
            ErrorContext::IndexExpression => "an index expression",
            ErrorContext::TypeReference => "a type reference",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (at {span}){}", while_parsing(.context))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

fn while_parsing(context: &Option<ErrorContext>) -> String {
    context.map_or_else(String::new, |c| format!(" while parsing {}", c.description()))
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    /// Tokens left over after a complete expression.
    #[error("multi-expressions not allowed, found {found}")]
    TrailingInput { found: TokenKind },
    /// `T(Name)` did not resolve through the parse context.
    #[error("unresolved type '{name}'")]
    UnresolvedType { name: String },
    /// A call whose callee is not a plain identifier, e.g. `(a)(1)`.
    #[error("only a function name can be called")]
    InvalidCallTarget,
    #[error("expression is too large ({len} bytes)")]
    SourceTooLarge { len: usize },
    #[error("{}", .0.kind)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    #[cold]
    pub fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    #[cold]
    pub fn trailing(found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::TrailingInput { found }, span)
    }

    #[cold]
    pub fn unresolved_type(name: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::UnresolvedType { name: name.into() }, span)
    }

    #[cold]
    pub fn invalid_call_target(span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidCallTarget, span)
    }

    /// Attach `context` unless a more specific one is already set.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn message_key(&self) -> &'static str {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "el.parse.unexpectedToken",
            ParseErrorKind::TrailingInput { .. } => "el.parse.multiExpressions",
            ParseErrorKind::UnresolvedType { .. } => "el.parse.unresolvedType",
            ParseErrorKind::InvalidCallTarget => "el.parse.invalidCallTarget",
            ParseErrorKind::SourceTooLarge { .. } => "el.parse.sourceTooLarge",
            ParseErrorKind::Lex(e) => e.message_key(),
        }
    }

    /// Kind-specific arguments followed by the error offset.
    pub fn message_args(&self) -> Vec<String> {
        let mut args = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                vec![(*expected).to_owned(), found.to_string()]
            }
            ParseErrorKind::TrailingInput { found } => vec![found.to_string()],
            ParseErrorKind::UnresolvedType { name } => vec![name.clone()],
            ParseErrorKind::InvalidCallTarget => Vec::new(),
            ParseErrorKind::SourceTooLarge { len } => vec![len.to_string()],
            ParseErrorKind::Lex(e) => return e.message_args(),
        };
        args.push(self.span.start.to_string());
        args
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}

#[cfg(test)]
mod tests;
