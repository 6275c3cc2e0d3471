//! Numeric literal decoding.
//!
//! Integers decode to the narrowest adequate width: `Int(i32)`, then
//! `Long(i64)`, then `BigInt`. Decoding never wraps.

use el_ir::Literal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Decode a decimal integer lexeme. A single leading `-` is honored.
///
/// Returns `None` if `text` has no digits or contains a non-digit.
pub fn decode_integer(text: &str) -> Option<Literal> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(value) => Some(narrow(value)),
        Err(_) => BigInt::parse_bytes(text.as_bytes(), 10).map(|v| Literal::BigInt(Box::new(v))),
    }
}

/// Decode the digits of a hex literal (without `0x` or the `L` suffix).
///
/// Plain hex widens like a decimal literal. Hex-long must fit in an `i64`;
/// `None` means malformed or out of range.
pub fn decode_hex(digits: &str, long: bool) -> Option<Literal> {
    if digits.is_empty() {
        return None;
    }
    let value = BigInt::parse_bytes(digits.as_bytes(), 16)?;
    if long {
        return value.to_i64().map(Literal::Long);
    }
    Some(match value.to_i64() {
        Some(v) => narrow(v),
        None => Literal::BigInt(Box::new(value)),
    })
}

/// Decode a double lexeme such as `1.5`, `2e10` or `3.0E-2`.
pub fn decode_double(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Decode a float lexeme, with or without its `f` suffix.
pub fn decode_float(text: &str) -> Option<f32> {
    text.trim_end_matches(['f', 'F']).parse().ok()
}

#[inline]
fn narrow(value: i64) -> Literal {
    i32::try_from(value).map_or(Literal::Long(value), Literal::Int)
}

#[cfg(test)]
mod tests;
