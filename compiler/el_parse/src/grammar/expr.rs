//! Precedence chain.
//!
//! Lowest to highest: ternary, `||`, `&&`, equality, relational, additive,
//! multiplicative, unary, postfix. Binary levels are left associative; the
//! ternary is right associative and its branches are full expressions.

use el_ir::{BinaryOp, Expr, ExprId, ExprKind, Literal, Span, TokenKind, UnaryOp};
use el_stack::ensure_sufficient_stack;
use num_bigint::BigInt;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_, '_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_ternary())
    }

    /// `cond ? yes : no`
    fn parse_ternary(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_or()?;
        if !self.check(TokenKind::Question) {
            return Ok(cond);
        }
        self.advance()?;

        self.ques_depth += 1;
        let yes = self.parse_expr();
        self.ques_depth -= 1;
        let yes = yes.map_err(|e| e.or_context(ErrorContext::Ternary))?;

        self.expect(TokenKind::Colon, "`:`")
            .map_err(|e| e.or_context(ErrorContext::Ternary))?;
        let no = self.parse_expr()?;

        let span = self.span_of(cond).merge(self.span_of(no));
        Ok(self.alloc(ExprKind::Choice { cond, yes, no }, span))
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_and, Self::match_or_op)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_equality, Self::match_and_op)
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_relational, Self::match_equality_op)
    }

    fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_additive, Self::match_relational_op)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_unary, Self::match_multiplicative_op)
    }

    /// One left-associative level: `next (op next)*`.
    fn parse_binary_level(
        &mut self,
        next: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(&Self) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self) {
            self.advance()?;
            let right = next(self)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    /// `! - + ~` prefixes. A sign directly before a number literal folds
    /// into the literal.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_postfix(),
        };
        let start = self.advance()?.span;

        if matches!(op, UnaryOp::Neg | UnaryOp::Plus) && self.current_kind().is_number() {
            let hex_long = self.check(TokenKind::HexLong);
            let value = self.number_literal()?;
            let end = self.advance()?.span;
            let value = match (op, value) {
                (UnaryOp::Plus, value) => value,
                // An explicit long stays a long, even at -0x80000000L.
                (_, Literal::Long(v)) if hex_long => Literal::Long(-v),
                (_, value) => negate(value),
            };
            let literal = self.alloc(ExprKind::Literal(value), start.merge(end));
            return self.parse_postfix_rest(literal);
        }

        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    // === Arena helpers ===

    #[inline]
    pub(crate) fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    pub(crate) fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

/// Negate a folded literal.
///
/// `-(int MIN)` widens to long; `-2147483648` written as a long narrows back
/// to int MIN, and `-9223372036854775808` narrows back to long MIN.
pub(crate) fn negate(value: Literal) -> Literal {
    match value {
        Literal::Int(v) => v
            .checked_neg()
            .map_or(Literal::Long(-i64::from(v)), Literal::Int),
        Literal::Long(2_147_483_648) => Literal::Int(i32::MIN),
        Literal::Long(v) => v
            .checked_neg()
            .map_or_else(|| Literal::BigInt(Box::new(-BigInt::from(v))), Literal::Long),
        Literal::BigInt(v) => {
            let negated = -*v;
            match i64::try_from(&negated) {
                Ok(v) => Literal::Long(v),
                Err(_) => Literal::BigInt(Box::new(negated)),
            }
        }
        Literal::Float(v) => Literal::Float(-v),
        Literal::Double(v) => Literal::Double(-v),
        other @ (Literal::Null | Literal::Bool(_) | Literal::Str(_)) => other,
    }
}
