//! Token kinds for the expression language.
//!
//! `TokenKind` is a closed, fieldless enumeration. Literal payloads (decoded
//! numbers, cooked strings, interned identifier names) are exposed by the
//! lexer for the current token instead of being stored here, which keeps
//! `Token` a small `Copy` value.

use std::fmt;

use super::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Decimal integer: `42`
    Int,
    /// Hex integer: `0x1F`
    Hex,
    /// Hex long: `0x1FL`
    HexLong,
    /// Single precision float: `1.5f`
    Float,
    /// Double: `1.5`, `2e10`
    Double,
    /// Single-quoted string: `'text'`
    String,
    /// Double-quoted alias string: `"text"`
    Alias,
    Null,
    True,
    False,

    /// Identifier (interned)
    Ident,

    // Reserved keywords
    If,
    Else,
    Return,
    For,
    While,
    Do,
    New,
    InstanceOf,
    Contains,
    StartsWith,
    EndsWith,
    ByteType,
    ShortType,
    IntType,
    LongType,
    FloatType,
    DoubleType,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Bang,
    Tilde,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    BangEq,
    /// `<>`
    LtGt,
    /// `<=>`
    LtEqGt,
    PlusEq,
    MinusEq,
    PlusPlus,
    MinusMinus,
    AmpAmp,
    PipePipe,
    Eq,
    Question,

    // Brackets
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Separators
    Comma,
    Colon,
    Semicolon,
    Dot,

    /// Illegal character. The lexer keeps going; the parser reports it.
    Error,
    Eof,
}

impl TokenKind {
    /// Source text of a keyword token, used when a keyword appears in
    /// member position (`list.contains(x)`).
    pub const fn keyword_str(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::New => "new",
            TokenKind::InstanceOf => "instanceof",
            TokenKind::Contains => "contains",
            TokenKind::StartsWith => "startsWith",
            TokenKind::EndsWith => "endsWith",
            TokenKind::ByteType => "byte",
            TokenKind::ShortType => "short",
            TokenKind::IntType => "int",
            TokenKind::LongType => "long",
            TokenKind::FloatType => "float",
            TokenKind::DoubleType => "double",
            TokenKind::Null => "null",
            TokenKind::True => "true",
            TokenKind::False => "false",
            _ => return None,
        })
    }

    pub const fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    pub const fn is_number(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Hex
                | TokenKind::HexLong
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Int => "integer literal",
            TokenKind::Hex => "hex literal",
            TokenKind::HexLong => "hex long literal",
            TokenKind::Float => "float literal",
            TokenKind::Double => "double literal",
            TokenKind::String => "string literal",
            TokenKind::Alias => "quoted string",
            TokenKind::Ident => "identifier",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Bang => "`!`",
            TokenKind::Tilde => "`~`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::EqEq => "`==`",
            TokenKind::BangEq => "`!=`",
            TokenKind::LtGt => "`<>`",
            TokenKind::LtEqGt => "`<=>`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Eq => "`=`",
            TokenKind::Question => "`?`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::Error => "illegal character",
            TokenKind::Eof => "end of expression",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Return => "`return`",
            TokenKind::For => "`for`",
            TokenKind::While => "`while`",
            TokenKind::Do => "`do`",
            TokenKind::New => "`new`",
            TokenKind::InstanceOf => "`instanceof`",
            TokenKind::Contains => "`contains`",
            TokenKind::StartsWith => "`startsWith`",
            TokenKind::EndsWith => "`endsWith`",
            TokenKind::ByteType => "`byte`",
            TokenKind::ShortType => "`short`",
            TokenKind::IntType => "`int`",
            TokenKind::LongType => "`long`",
            TokenKind::FloatType => "`float`",
            TokenKind::DoubleType => "`double`",
            TokenKind::Null => "`null`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 12);
}
