use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use el_ir::BinaryOp;
use num_bigint::BigInt;
use proptest::prelude::*;

use super::*;
use crate::context::EmptyContext;
use crate::test_helpers::{Row, Settings};
use crate::EvalErrorKind;

fn bin(op: BinaryOp, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult {
    evaluate_binary(&EmptyContext, op, &left.into(), &right.into())
}

fn ok(op: BinaryOp, left: impl Into<Value>, right: impl Into<Value>) -> Value {
    bin(op, left, right).unwrap()
}

fn bd(text: &str) -> Value {
    Value::big_decimal(BigDecimal::from_str(text).unwrap())
}

mod arithmetic {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_operands_yield_long() {
        assert_eq!(ok(BinaryOp::Add, 1, 2), Value::Long(3));
        assert_eq!(ok(BinaryOp::Mul, Value::Short(3), Value::Byte(4)), Value::Long(12));
        assert_eq!(ok(BinaryOp::Sub, 'b', 'a'), Value::Long(1));
    }

    #[test]
    fn long_overflow_widens() {
        assert_eq!(
            ok(BinaryOp::Add, i64::MAX, 1),
            Value::big_int(BigInt::from(i64::MAX) + 1)
        );
        assert_eq!(
            ok(BinaryOp::Mul, i64::MIN, 2),
            Value::big_int(BigInt::from(i64::MIN) * 2)
        );
    }

    #[test]
    fn floating_and_big_promotion() {
        assert_eq!(ok(BinaryOp::Add, 1, 0.5), Value::Double(1.5));
        assert_eq!(ok(BinaryOp::Add, "1.5", 1), Value::Double(2.5));
        assert_eq!(ok(BinaryOp::Add, '7', 0.5), Value::Double(55.5));
        assert_eq!(
            ok(BinaryOp::Add, Value::big_int(BigInt::from(2)), 0.5),
            bd("2.5")
        );
        assert_eq!(ok(BinaryOp::Sub, bd("1.10"), 1), bd("0.10"));
        assert_eq!(
            ok(BinaryOp::Mul, Value::big_int(BigInt::from(3)), 2),
            Value::big_int(BigInt::from(6))
        );
    }

    #[test]
    fn nulls() {
        assert_eq!(ok(BinaryOp::Add, Value::Null, Value::Null), Value::Long(0));
        assert_eq!(ok(BinaryOp::Sub, Value::Null, 5), Value::Long(-5));
        assert_eq!(ok(BinaryOp::Div, Value::Null, Value::Null), Value::Long(0));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(ok(BinaryOp::Add, "a", "b"), Value::string("ab"));
        assert_eq!(ok(BinaryOp::Add, "a", Value::Null), Value::string("anull"));
        assert_eq!(
            ok(BinaryOp::Add, "x", Value::list(vec![Value::Int(1)])),
            Value::string("x[1]")
        );
    }

    #[test]
    fn non_numeric_string_with_number_fails() {
        let err = bin(BinaryOp::Add, "a", 1).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::ConversionFailed { .. }));
    }

    #[test]
    fn division() {
        assert_eq!(ok(BinaryOp::Div, 7, 2), Value::Double(3.5));
        assert_eq!(ok(BinaryOp::Div, 'a', 2), Value::Double(48.5));
        assert_eq!(ok(BinaryOp::Div, 1, 0), Value::Double(f64::INFINITY));
        assert_eq!(ok(BinaryOp::Div, bd("1.00"), 3), bd("0.33"));
        assert_eq!(ok(BinaryOp::Div, bd("2.5"), 2), bd("1.3"));
        assert_eq!(
            bin(BinaryOp::Div, Value::big_int(BigInt::from(1)), 0).unwrap_err().kind,
            EvalErrorKind::DivisionByZero
        );
    }

    #[test]
    fn remainder() {
        assert_eq!(ok(BinaryOp::Mod, 7, 3), Value::Long(1));
        assert_eq!(ok(BinaryOp::Mod, -7, 3), Value::Long(-1));
        assert_eq!(ok(BinaryOp::Mod, 7.5, 2), Value::Double(1.5));
        assert_eq!(ok(BinaryOp::Mod, bd("7"), 4), Value::Double(3.0));
        assert_eq!(ok(BinaryOp::Mod, i64::MIN, -1), Value::Long(0));
        assert_eq!(
            bin(BinaryOp::Mod, 1, 0).unwrap_err().kind,
            EvalErrorKind::DivisionByZero
        );
    }
}

mod equality {
    use pretty_assertions::assert_eq;

    use super::*;

    fn eq(left: impl Into<Value>, right: impl Into<Value>) -> bool {
        equals(&EmptyContext, &left.into(), &right.into()).unwrap()
    }

    #[test]
    fn promotion() {
        assert!(eq(1, 1_i64));
        assert!(eq(1, 1.0));
        assert!(eq(bd("1.0"), 1));
        assert!(eq(Value::big_int(BigInt::from(5)), 5.0));
        assert!(!eq(1, 2));
    }

    #[test]
    fn nulls() {
        assert!(eq(Value::Null, Value::Null));
        assert!(!eq(Value::Null, 0));
        assert!(!eq("", Value::Null));
    }

    #[test]
    fn booleans_and_strings() {
        assert!(eq(true, "TRUE"));
        assert!(eq("1", 1));
        assert!(eq('a', "a"));
        assert!(!eq("a", "b"));
    }

    #[test]
    fn objects_by_identity() {
        let row = Value::object(Row(Vec::new()));
        assert!(eq(row.clone(), row));
        assert!(!eq(Value::object(Row(Vec::new())), Value::object(Row(Vec::new()))));
    }

    #[test]
    fn not_equal_operator() {
        assert_eq!(ok(BinaryOp::NotEq, 1, 2), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Eq, Value::Int(2), Value::Long(2)), Value::Bool(true));
    }
}

mod ordering {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numbers_strings_chars_bools() {
        assert_eq!(ok(BinaryOp::Lt, 1, 2.5), Value::Bool(true));
        assert_eq!(ok(BinaryOp::GtEq, bd("2.00"), 2), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Lt, "abc", "abd"), Value::Bool(true));
        assert_eq!(ok(BinaryOp::LtEq, "b", "b"), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Gt, 'b', 'a'), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Lt, false, true), Value::Bool(true));
    }

    #[test]
    fn nulls() {
        assert_eq!(ok(BinaryOp::Lt, Value::Null, 1), Value::Bool(false));
        assert_eq!(ok(BinaryOp::Gt, 1, Value::Null), Value::Bool(false));
        assert_eq!(ok(BinaryOp::LtEq, Value::Null, Value::Null), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Lt, Value::Null, Value::Null), Value::Bool(false));
        assert_eq!(ok(BinaryOp::GtEq, Value::Null, 0), Value::Bool(false));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(ok(BinaryOp::Lt, f64::NAN, 1), Value::Bool(false));
        assert_eq!(ok(BinaryOp::GtEq, f64::NAN, 1), Value::Bool(false));
        assert_eq!(compare(&EmptyContext, &Value::Double(f64::NAN), &Value::Int(1)).unwrap(), None);
    }

    #[test]
    fn three_way() {
        assert_eq!(ok(BinaryOp::Compare, 1, 2), Value::Int(-1));
        assert_eq!(ok(BinaryOp::Compare, "b", "b"), Value::Int(0));
        assert_eq!(ok(BinaryOp::Compare, Value::Null, 1), Value::Int(-1));
        assert_eq!(ok(BinaryOp::Compare, 1, Value::Null), Value::Int(1));
        assert_eq!(ok(BinaryOp::Compare, Value::Null, Value::Null), Value::Int(0));
        assert!(matches!(
            bin(BinaryOp::Compare, f64::NAN, 1).unwrap_err().kind,
            EvalErrorKind::ValuesNotComparable { .. }
        ));
    }

    #[test]
    fn incomparable_values() {
        let err = bin(BinaryOp::Lt, Value::list(Vec::new()), Value::list(Vec::new())).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ValuesNotComparable {
                left: "el.lang.List".to_owned(),
                right: "el.lang.List".to_owned(),
            }
        );
        assert_eq!(
            compare(&EmptyContext, &Value::Int(1), &Value::Int(1)).unwrap(),
            Some(Ordering::Equal)
        );
    }
}

mod word_operators {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn contains() {
        assert_eq!(ok(BinaryOp::Contains, "hello", "ell"), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Contains, "hello", Value::Null), Value::Bool(false));
        assert_eq!(
            ok(BinaryOp::Contains, Value::list(vec![Value::Long(1)]), 1),
            Value::Bool(true)
        );
        assert_eq!(
            ok(BinaryOp::Contains, Value::map([("k", Value::Null)]), "k"),
            Value::Bool(true)
        );
        assert_eq!(ok(BinaryOp::Contains, Value::Null, "k"), Value::Bool(false));
    }

    #[test]
    fn contains_on_host_objects() {
        let settings = Value::object(Settings::default().with("k", 1));
        assert_eq!(ok(BinaryOp::Contains, settings.clone(), "k"), Value::Bool(true));
        assert_eq!(ok(BinaryOp::Contains, settings, "z"), Value::Bool(false));

        let row = Value::object(Row(vec![Value::string("x")]));
        assert_eq!(ok(BinaryOp::Contains, row, "x"), Value::Bool(true));
    }

    #[test]
    fn contains_on_scalar_fails() {
        assert_eq!(
            bin(BinaryOp::Contains, 1, 1).unwrap_err().kind,
            EvalErrorKind::CannotApplyOperator {
                op: "contains",
                left: "el.lang.Integer".to_owned(),
                right: "el.lang.Integer".to_owned(),
            }
        );
    }

    #[test]
    fn affixes() {
        assert_eq!(ok(BinaryOp::StartsWith, "hello", "he"), Value::Bool(true));
        assert_eq!(ok(BinaryOp::EndsWith, 1234, 34), Value::Bool(true));
        assert_eq!(ok(BinaryOp::StartsWith, Value::Null, ""), Value::Bool(false));
    }

    #[test]
    fn instance_of() {
        let integer = Value::type_ref("el.lang.Integer");
        assert_eq!(ok(BinaryOp::InstanceOf, 1, integer.clone()), Value::Bool(true));
        assert_eq!(ok(BinaryOp::InstanceOf, Value::Null, integer), Value::Bool(false));
        assert_eq!(
            bin(BinaryOp::InstanceOf, 1, "el.lang.Integer").unwrap_err().kind,
            EvalErrorKind::NotAType { type_name: "el.lang.String".to_owned() }
        );
    }
}

proptest! {
    #[test]
    fn long_addition_matches_big_int(a in any::<i64>(), b in any::<i64>()) {
        let sum = ok(BinaryOp::Add, a, b);
        let expected = BigInt::from(a) + BigInt::from(b);
        match sum {
            Value::Long(v) => {
                prop_assert_eq!(BigInt::from(v), expected);
            }
            Value::BigInt(v) => {
                prop_assert!(a.checked_add(b).is_none());
                prop_assert_eq!(&*v, &expected);
            }
            other => {
                prop_assert!(false, "unexpected {:?}", other);
            }
        }
    }

    #[test]
    fn three_way_is_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
        let ab = ok(BinaryOp::Compare, a, b);
        let ba = ok(BinaryOp::Compare, b, a);
        match (ab, ba) {
            (Value::Int(x), Value::Int(y)) => {
                prop_assert_eq!(x, -y);
            }
            other => {
                prop_assert!(false, "unexpected {:?}", other);
            }
        }
    }
}
