//! Parser for EL expressions.
//!
//! Recursive descent over a pull lexer. The result is a flat
//! [`ExprArena`] plus the root id and the [`SymbolTable`] that owns every
//! name in it.
//!
//! # Module Structure
//!
//! - `context`: `ParseContext` (type resolution, constants) and its default
//! - `cursor`: token-level helpers (`check`, `advance`, `expect`)
//! - `error`: `ParseError`, `ParseErrorKind`, `ErrorContext`
//! - `grammar`: the precedence chain, unary folding, postfix and primaries

mod context;
mod cursor;
mod error;
mod grammar;

use el_ir::{ExprArena, ExprId, SymbolTable, Token, TokenKind};
use el_lexer::Lexer;

pub use context::{DefaultParseContext, ParseContext, BUILTIN_TYPES, DEFAULT_PACKAGE};
pub use error::{ErrorContext, ParseError, ParseErrorKind};

/// Output of a successful parse.
#[derive(Clone, Debug)]
pub struct ParsedExpr {
    pub arena: ExprArena,
    pub root: ExprId,
    pub symbols: SymbolTable,
}

/// Parse `source` with a [`DefaultParseContext`].
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    parse_with(source, &DefaultParseContext::new())
}

/// Parse `source`, resolving `T(Name)` and constants through `context`.
///
/// Fails if anything but end of input follows the expression.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with(source: &str, context: &dyn ParseContext) -> Result<ParsedExpr, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::new(
            ParseErrorKind::SourceTooLarge { len: source.len() },
            el_ir::Span::DUMMY,
        ));
    }
    Parser::new(source, context).parse()
}

/// Expression parser. One instance parses one source string.
pub struct Parser<'src, 'ctx> {
    lexer: Lexer<'src>,
    context: &'ctx dyn ParseContext,
    arena: ExprArena,
    current: Token,
    /// Number of enclosing ternary "yes" branches. While non-zero, `a:b(...)`
    /// is not a prefixed call, so the `:` can close the ternary.
    ques_depth: u32,
}

impl<'src, 'ctx> Parser<'src, 'ctx> {
    pub fn new(source: &'src str, context: &'ctx dyn ParseContext) -> Self {
        Parser {
            lexer: Lexer::new(source),
            context,
            arena: ExprArena::new(),
            current: Token::new(TokenKind::Eof, el_ir::Span::DUMMY),
            ques_depth: 0,
        }
    }

    /// Parse a single complete expression.
    pub fn parse(mut self) -> Result<ParsedExpr, ParseError> {
        self.advance()?;
        let root = self
            .parse_expr()
            .map_err(|e| e.or_context(ErrorContext::Expression))?;
        if !self.check(TokenKind::Eof) {
            return Err(self.trailing_error());
        }
        tracing::trace!(nodes = self.arena.len(), "parsed expression");
        Ok(ParsedExpr {
            arena: self.arena,
            root,
            symbols: self.lexer.into_symbols(),
        })
    }
}
