//! Lexer error types.
//!
//! A `LexError` aborts tokenization. It carries the span of the offending
//! text and a structured kind; `message_key`/`message_args` let a host
//! localize the message instead of using the English `Display`.

use el_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} (at {span})")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === String errors ===
    /// End of input before the closing quote.
    #[error("unclosed string literal, expected closing {quote}")]
    UnterminatedString { quote: char },
    /// Backslash followed by a character with no escape meaning.
    #[error("invalid escape sequence '\\{escape}'")]
    InvalidEscape { escape: char },
    /// `\u` not followed by four hex digits, or an unpaired surrogate.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    /// `\x` not followed by two hex digits.
    #[error("invalid hex escape")]
    InvalidHexEscape,

    // === Character errors ===
    #[error("illegal character {ch:?}")]
    IllegalCharacter { ch: char },

    // === Numeric errors ===
    #[error("malformed number '{text}'")]
    MalformedNumber { text: String },
    #[error("number '{text}' is out of range")]
    NumberOutOfRange { text: String },
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    #[cold]
    pub fn unterminated_string(span: Span, quote: char) -> Self {
        Self::new(span, LexErrorKind::UnterminatedString { quote })
    }

    #[cold]
    pub fn invalid_escape(span: Span, escape: char) -> Self {
        Self::new(span, LexErrorKind::InvalidEscape { escape })
    }

    #[cold]
    pub fn invalid_unicode_escape(span: Span) -> Self {
        Self::new(span, LexErrorKind::InvalidUnicodeEscape)
    }

    #[cold]
    pub fn invalid_hex_escape(span: Span) -> Self {
        Self::new(span, LexErrorKind::InvalidHexEscape)
    }

    #[cold]
    pub fn illegal_character(span: Span, ch: char) -> Self {
        Self::new(span, LexErrorKind::IllegalCharacter { ch })
    }

    #[cold]
    pub fn malformed_number(span: Span, text: &str) -> Self {
        Self::new(
            span,
            LexErrorKind::MalformedNumber {
                text: text.to_owned(),
            },
        )
    }

    #[cold]
    pub fn number_out_of_range(span: Span, text: &str) -> Self {
        Self::new(
            span,
            LexErrorKind::NumberOutOfRange {
                text: text.to_owned(),
            },
        )
    }

    pub fn message_key(&self) -> &'static str {
        self.kind.message_key()
    }

    /// Arguments for the localized message: the kind's own arguments, then
    /// the start offset.
    pub fn message_args(&self) -> Vec<String> {
        let mut args = self.kind.message_args();
        args.push(self.span.start.to_string());
        args
    }
}

impl LexErrorKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString { .. } => "el.lex.unterminatedString",
            LexErrorKind::InvalidEscape { .. } => "el.lex.invalidEscape",
            LexErrorKind::InvalidUnicodeEscape => "el.lex.invalidUnicodeEscape",
            LexErrorKind::InvalidHexEscape => "el.lex.invalidHexEscape",
            LexErrorKind::IllegalCharacter { .. } => "el.lex.illegalChar",
            LexErrorKind::MalformedNumber { .. } => "el.lex.malformedNumber",
            LexErrorKind::NumberOutOfRange { .. } => "el.lex.numberOutOfRange",
        }
    }

    pub fn message_args(&self) -> Vec<String> {
        match self {
            LexErrorKind::UnterminatedString { quote } => vec![quote.to_string()],
            LexErrorKind::InvalidEscape { escape } => vec![escape.to_string()],
            LexErrorKind::IllegalCharacter { ch } => vec![u32::from(*ch).to_string()],
            LexErrorKind::MalformedNumber { text } | LexErrorKind::NumberOutOfRange { text } => {
                vec![text.clone()]
            }
            LexErrorKind::InvalidUnicodeEscape | LexErrorKind::InvalidHexEscape => Vec::new(),
        }
    }
}
