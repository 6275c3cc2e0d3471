use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn big(text: &str) -> Literal {
    Literal::BigInt(Box::new(BigInt::parse_bytes(text.as_bytes(), 10).unwrap()))
}

// === Decimal ===

#[test]
fn int_range_stays_int() {
    assert_eq!(decode_integer("0"), Some(Literal::Int(0)));
    assert_eq!(decode_integer("2147483647"), Some(Literal::Int(i32::MAX)));
    assert_eq!(decode_integer("-2147483648"), Some(Literal::Int(i32::MIN)));
}

#[test]
fn widens_to_long_past_int() {
    assert_eq!(decode_integer("2147483648"), Some(Literal::Long(2_147_483_648)));
    assert_eq!(decode_integer("-2147483649"), Some(Literal::Long(-2_147_483_649)));
    assert_eq!(
        decode_integer("9223372036854775807"),
        Some(Literal::Long(i64::MAX))
    );
}

#[test]
fn widens_to_big_past_long() {
    assert_eq!(
        decode_integer("9223372036854775808"),
        Some(big("9223372036854775808"))
    );
    assert_eq!(
        decode_integer("-9223372036854775809"),
        Some(big("-9223372036854775809"))
    );
    assert_eq!(
        decode_integer("123456789012345678901234567890"),
        Some(big("123456789012345678901234567890"))
    );
}

#[test]
fn malformed_integers() {
    assert_eq!(decode_integer(""), None);
    assert_eq!(decode_integer("-"), None);
    assert_eq!(decode_integer("+1"), None);
    assert_eq!(decode_integer("12a"), None);
    assert_eq!(decode_integer("--1"), None);
}

// === Hex ===

#[test]
fn hex_decodes() {
    assert_eq!(decode_hex("1F", false), Some(Literal::Int(31)));
    assert_eq!(decode_hex("1f", true), Some(Literal::Long(31)));
    assert_eq!(decode_hex("7FFFFFFF", false), Some(Literal::Int(i32::MAX)));
}

#[test]
fn plain_hex_widens() {
    assert_eq!(decode_hex("FFFFFFFF", false), Some(Literal::Long(0xFFFF_FFFF)));
    assert_eq!(
        decode_hex("10000000000000000", false),
        Some(big("18446744073709551616"))
    );
}

#[test]
fn hex_long_must_fit() {
    assert_eq!(
        decode_hex("7FFFFFFFFFFFFFFF", true),
        Some(Literal::Long(i64::MAX))
    );
    assert_eq!(decode_hex("8000000000000000", true), None);
    assert_eq!(decode_hex("", true), None);
}

// === Floating ===

#[test]
fn floating_lexemes() {
    assert_eq!(decode_double("1.5"), Some(1.5));
    assert_eq!(decode_double("2e3"), Some(2000.0));
    assert_eq!(decode_double("3.0E-1"), Some(0.3));
    assert_eq!(decode_float("1.5f"), Some(1.5));
    assert_eq!(decode_float("2.5F"), Some(2.5));
    assert_eq!(decode_float("2.5"), Some(2.5));
}

// === Properties ===

proptest! {
    #[test]
    fn every_i32_decodes_as_int(v in any::<i32>()) {
        prop_assert_eq!(decode_integer(&v.to_string()), Some(Literal::Int(v)));
    }

    #[test]
    fn i64_outside_i32_decodes_as_long(
        v in any::<i64>().prop_filter("outside i32", |v| i32::try_from(*v).is_err())
    ) {
        prop_assert_eq!(decode_integer(&v.to_string()), Some(Literal::Long(v)));
    }

    #[test]
    fn i128_outside_i64_decodes_as_big(
        v in any::<i128>().prop_filter("outside i64", |v| i64::try_from(*v).is_err())
    ) {
        let text = v.to_string();
        prop_assert_eq!(decode_integer(&text), Some(big(&text)));
    }
}
