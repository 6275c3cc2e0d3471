//! Escape processing for quoted literals.
//!
//! Two dialects share one escape core:
//!
//! | Escape          | `'single'` | `"double"` |
//! |-----------------|------------|------------|
//! | `\" \\ \/ \'`   | yes        | yes        |
//! | `\b \f \F \n \r \t` | yes    | yes        |
//! | `\uHHHH`        | yes        | yes        |
//! | octal `\0`..`\377` | yes     | no         |
//! | `\xHH`          | no         | yes        |
//!
//! `\F` is an alias of `\f`. Octal escapes follow the JLS: a `0-3` digit
//! followed by two octal digits takes three digits, an octal digit followed
//! by another takes two, otherwise one.

use el_ir::Span;

use crate::cursor::Cursor;
use crate::lex_error::LexError;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Quote {
    /// `'...'`, with octal escapes.
    Single,
    /// `"..."`, with `\xHH` escapes.
    Double,
}

impl Quote {
    pub(crate) const fn char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Scan the body of a quoted literal and append its cooked text to `out`.
///
/// The cursor must sit just past the opening quote. On success it sits just
/// past the closing quote.
pub(crate) fn cook_quoted(
    cursor: &mut Cursor<'_>,
    quote: Quote,
    out: &mut String,
) -> Result<(), LexError> {
    let open = cursor.pos().saturating_sub(1);
    loop {
        let Some(c) = cursor.bump() else {
            return Err(LexError::unterminated_string(
                span(open, cursor.pos()),
                quote.char(),
            ));
        };
        if c == quote.char() {
            return Ok(());
        }
        if c != '\\' {
            out.push(c);
            continue;
        }

        let escape_start = cursor.pos() - 1;
        let Some(esc) = cursor.bump() else {
            return Err(LexError::unterminated_string(
                span(open, cursor.pos()),
                quote.char(),
            ));
        };
        match esc {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            '\'' => out.push('\''),
            'b' => out.push('\u{8}'),
            'f' | 'F' => out.push('\u{C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => out.push(cook_unicode(cursor, escape_start)?),
            'x' if quote == Quote::Double => {
                let value = read_hex(cursor, 2)
                    .ok_or_else(|| LexError::invalid_hex_escape(span(escape_start, cursor.pos())))?;
                // Two hex digits are always a valid Latin-1 scalar.
                out.push(char::from(u8::try_from(value).unwrap_or(u8::MAX)));
            }
            '0'..='7' if quote == Quote::Single => out.push(cook_octal(cursor, esc)),
            other => {
                return Err(LexError::invalid_escape(
                    span(escape_start, cursor.pos()),
                    other,
                ));
            }
        }
    }
}

/// Decode the rest of a `\uHHHH` escape, pairing surrogates.
fn cook_unicode(cursor: &mut Cursor<'_>, escape_start: usize) -> Result<char, LexError> {
    let invalid = |cursor: &Cursor<'_>| LexError::invalid_unicode_escape(span(escape_start, cursor.pos()));

    let high = read_hex(cursor, 4).ok_or_else(|| invalid(cursor))?;
    if let Some(c) = char::from_u32(high) {
        return Ok(c);
    }
    if !(0xD800..0xDC00).contains(&high) {
        return Err(invalid(cursor));
    }
    if !(cursor.eat('\\') && cursor.eat('u')) {
        return Err(invalid(cursor));
    }
    let low = read_hex(cursor, 4).ok_or_else(|| invalid(cursor))?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(invalid(cursor));
    }
    let scalar = 0x1_0000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(scalar).ok_or_else(|| invalid(cursor))
}

/// Decode an octal escape whose first digit `first` was already consumed.
fn cook_octal(cursor: &mut Cursor<'_>, first: char) -> char {
    let mut value = octal_digit(first);
    let second = cursor.current().filter(|c| is_octal(*c));
    if let Some(second) = second {
        let third = cursor.peek().filter(|c| is_octal(*c));
        cursor.bump();
        value = value * 8 + octal_digit(second);
        if let (Some(third), true) = (third, first <= '3') {
            cursor.bump();
            value = value * 8 + octal_digit(third);
        }
    }
    // At most \377, always a valid scalar.
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Read exactly `count` hex digits. Consumes only what it reads.
fn read_hex(cursor: &mut Cursor<'_>, count: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = cursor.current()?.to_digit(16)?;
        cursor.bump();
        value = value * 16 + digit;
    }
    Some(value)
}

#[inline]
fn is_octal(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[inline]
fn octal_digit(c: char) -> u32 {
    c.to_digit(8).unwrap_or(0)
}

#[inline]
fn span(start: usize, end: usize) -> Span {
    Span::try_from_range(start..end).unwrap_or(Span::DUMMY)
}
