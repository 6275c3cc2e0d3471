//! Reserved-word table.
//!
//! A const, length-bucketed match: the identifier's length selects a small
//! arm, then the text is compared against the few keywords of that length.
//! Keywords are 2 to 10 ASCII characters long.

use el_ir::TokenKind;

/// Look up a reserved word. `None` means the text is a plain identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=10).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "do" => Some(TokenKind::Do),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "new" => Some(TokenKind::New),
            "int" => Some(TokenKind::IntType),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "byte" => Some(TokenKind::ByteType),
            "long" => Some(TokenKind::LongType),
            "null" => Some(TokenKind::Null),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "short" => Some(TokenKind::ShortType),
            "float" => Some(TokenKind::FloatType),
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "double" => Some(TokenKind::DoubleType),
            _ => None,
        },
        8 => match text {
            "contains" => Some(TokenKind::Contains),
            "endsWith" => Some(TokenKind::EndsWith),
            _ => None,
        },
        10 => match text {
            "instanceof" => Some(TokenKind::InstanceOf),
            "startsWith" => Some(TokenKind::StartsWith),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
