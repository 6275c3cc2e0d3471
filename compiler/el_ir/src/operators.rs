//! Binary and unary operators.
//!
//! Precedence levels, loosest last:
//! - 3: `*` `/` `%`
//! - 4: `+` `-`
//! - 7: `<` `<=` `>` `>=` `contains` `startsWith` `endsWith` `instanceof`
//! - 8: `==` `!=` `<=>`
//! - 12: `&&`
//! - 13: `||`
//!
//! The ternary sits below all of them. Every binary level is left
//! associative.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Equality
    Eq,
    NotEq,
    /// Three-way comparison `<=>`.
    Compare,

    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,
    Contains,
    StartsWith,
    EndsWith,
    InstanceOf,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Source-level symbol, as the printer emits it.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Compare => "<=>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::InstanceOf => "instanceof",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Precedence level. Higher number = binds less tightly.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 4,
            Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Contains
            | Self::StartsWith
            | Self::EndsWith
            | Self::InstanceOf => 7,
            Self::Eq | Self::NotEq | Self::Compare => 8,
            Self::And => 12,
            Self::Or => 13,
        }
    }
}

/// Precedence of `?:`, looser than any binary operator.
pub const TERNARY_PRECEDENCE: u8 = 15;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Plus,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }
}
