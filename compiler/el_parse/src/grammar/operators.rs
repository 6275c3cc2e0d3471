//! Operator matching helpers.

use el_ir::{BinaryOp, TokenKind};

use crate::Parser;

impl Parser<'_, '_> {
    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PipePipe => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::AmpAmp => Some(BinaryOp::And),
            _ => None,
        }
    }

    /// `<>` is an alias of `!=`.
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::BangEq | TokenKind::LtGt => Some(BinaryOp::NotEq),
            TokenKind::LtEqGt => Some(BinaryOp::Compare),
            _ => None,
        }
    }

    pub(crate) fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::Contains => Some(BinaryOp::Contains),
            TokenKind::StartsWith => Some(BinaryOp::StartsWith),
            TokenKind::EndsWith => Some(BinaryOp::EndsWith),
            TokenKind::InstanceOf => Some(BinaryOp::InstanceOf),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }
}
