//! Primary expressions and postfix chains.
//!
//! Primaries: literals, identifiers, `(expr)`, `name(args)`,
//! `prefix:name(args)` and `T(Name)`. Postfix: `.name`, `.name(args)`,
//! `[index]`.

use el_ir::{ExprId, ExprKind, ExprRange, Literal, Name, Span, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

/// Callee name that turns a one-argument call into a type reference.
const TYPE_OPERATOR: &str = "T";

impl Parser<'_, '_> {
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let primary = self.parse_primary()?;
        self.parse_postfix_rest(primary)
    }

    pub(crate) fn parse_postfix_rest(&mut self, mut expr: ExprId) -> Result<ExprId, ParseError> {
        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance()?;
                    expr = self.parse_member(expr)?;
                }
                TokenKind::LBracket => {
                    self.advance()?;
                    let index = self
                        .nested(Self::parse_expr)
                        .map_err(|e| e.or_context(ErrorContext::IndexExpression))?;
                    let end = self
                        .expect(TokenKind::RBracket, "`]`")
                        .map_err(|e| e.or_context(ErrorContext::IndexExpression))?
                        .span;
                    let span = self.span_of(expr).merge(end);
                    expr = self.alloc(ExprKind::Item { target: expr, index }, span);
                }
                TokenKind::LParen => {
                    let span = self.span_of(expr).merge(self.current_span());
                    return Err(ParseError::invalid_call_target(span));
                }
                _ => return Ok(expr),
            }
        }
    }

    /// After `.`: a property or a method call. Keywords are valid member
    /// names, so `list.contains(x)` is a method call.
    fn parse_member(&mut self, owner: ExprId) -> Result<ExprId, ParseError> {
        let kind = self.current_kind();
        if kind != TokenKind::Ident && !kind.is_keyword() {
            return Err(self.unexpected("member name"));
        }
        let name = self.lexer.name();
        let name_span = self.advance()?.span;

        if !self.check(TokenKind::LParen) {
            let span = self.span_of(owner).merge(name_span);
            return Ok(self.alloc(ExprKind::Property { owner, name }, span));
        }

        let (args, end) = self
            .parse_args()
            .map_err(|e| e.or_context(ErrorContext::MethodCall))?;
        let site = self.arena.alloc_call_site();
        let span = self.span_of(owner).merge(end);
        Ok(self.alloc(
            ExprKind::Method {
                owner,
                name,
                args,
                site,
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        match self.current_kind() {
            TokenKind::Int
            | TokenKind::Hex
            | TokenKind::HexLong
            | TokenKind::Float
            | TokenKind::Double
            | TokenKind::String
            | TokenKind::Alias
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False => {
                let value = self.literal()?;
                let span = self.advance()?.span;
                Ok(self.alloc(ExprKind::Literal(value), span))
            }
            TokenKind::Ident => self.parse_ident(),
            TokenKind::LParen => {
                self.advance()?;
                let inner = self
                    .nested(Self::parse_expr)
                    .map_err(|e| e.or_context(ErrorContext::Parenthesized))?;
                self.expect(TokenKind::RParen, "`)`")
                    .map_err(|e| e.or_context(ErrorContext::Parenthesized))?;
                Ok(inner)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Identifier, `name(args)` or `prefix:name(args)`.
    fn parse_ident(&mut self) -> Result<ExprId, ParseError> {
        let name = self.lexer.name();
        let start = self.advance()?.span;

        match self.current_kind() {
            TokenKind::LParen => self.parse_call(None, name, start),
            // Inside a ternary "yes" branch the colon belongs to the ternary.
            TokenKind::Colon if self.ques_depth == 0 => {
                self.advance()?;
                if !self.check(TokenKind::Ident) {
                    return Err(self
                        .unexpected("function name")
                        .or_context(ErrorContext::FunctionCall));
                }
                let function = self.lexer.name();
                self.advance()?;
                self.parse_call(Some(name), function, start)
            }
            _ => {
                let snapshot = self.context.constant(self.lexer.symbols().lookup(name));
                Ok(self.alloc(ExprKind::Ident { name, snapshot }, start))
            }
        }
    }

    fn parse_call(
        &mut self,
        prefix: Option<Name>,
        name: Name,
        start: Span,
    ) -> Result<ExprId, ParseError> {
        let (args, end) = self
            .parse_args()
            .map_err(|e| e.or_context(ErrorContext::FunctionCall))?;
        let span = start.merge(end);

        if prefix.is_none() && args.len() == 1 && self.lexer.symbols().lookup(name) == TYPE_OPERATOR {
            let arg = self.arena.get_expr_list(args)[0];
            if let Some(path) = self.dotted_path(arg) {
                return self.type_ref(&path, span);
            }
        }

        let site = self.arena.alloc_call_site();
        Ok(self.alloc(
            ExprKind::Function {
                prefix,
                name,
                args,
                site,
            },
            span,
        ))
    }

    /// Resolve `T(path)` at parse time.
    fn type_ref(&mut self, path: &str, span: Span) -> Result<ExprId, ParseError> {
        let Some(qualified) = self.context.resolve_type(path) else {
            return Err(ParseError::unresolved_type(path, span)
                .or_context(ErrorContext::TypeReference));
        };
        let name = self.lexer.symbols_mut().intern(&qualified);
        Ok(self.alloc(ExprKind::TypeRef { name }, span))
    }

    /// `a` or `a.b.c` as text, if `id` is such a chain.
    fn dotted_path(&self, id: ExprId) -> Option<String> {
        let symbols = self.lexer.symbols();
        match &self.arena.get_expr(id).kind {
            ExprKind::Ident { name, .. } => Some(symbols.lookup(*name).to_owned()),
            ExprKind::Property { owner, name } => {
                let mut path = self.dotted_path(*owner)?;
                path.push('.');
                path.push_str(symbols.lookup(*name));
                Some(path)
            }
            _ => None,
        }
    }

    /// `(arg, ...)`, returning the argument range and the span of `)`.
    fn parse_args(&mut self) -> Result<(ExprRange, Span), ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;
        self.nested(|p| {
            let mut args = Vec::new();
            if !p.check(TokenKind::RParen) {
                loop {
                    args.push(p.parse_expr()?);
                    if !p.check(TokenKind::Comma) {
                        break;
                    }
                    p.advance()?;
                }
            }
            let end = p.expect(TokenKind::RParen, "`)`")?.span;
            Ok((p.arena.alloc_expr_list(args), end))
        })
    }

    /// Decoded value of the current literal token.
    fn literal(&self) -> Result<Literal, ParseError> {
        match self.lexer.literal_value()? {
            Some(value) => Ok(value),
            None => Err(self.unexpected("literal")),
        }
    }

    /// Decoded value of the current number token.
    pub(crate) fn number_literal(&self) -> Result<Literal, ParseError> {
        self.literal()
    }

    /// Run `f` outside any enclosing ternary branch. Delimited contexts
    /// (parentheses, brackets, argument lists) start at depth zero.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = std::mem::replace(&mut self.ques_depth, 0);
        let result = f(self);
        self.ques_depth = saved;
        result
    }
}
