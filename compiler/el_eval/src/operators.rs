//! Binary operator implementations for the evaluator.
//!
//! Operands are promoted before the operator applies. Arithmetic picks one
//! numeric class for both sides:
//!
//! - `BigDecimal` if either side is one, or if one side is floating (or a
//!   string that looks floating) and the other is a `BigInteger`
//! - `Double` if either side is floating or a floating-looking string
//! - `BigInteger` if either side is one
//! - `Long` otherwise, widening to `BigInteger` on overflow
//!
//! Comparisons use the same classes without the string sniffing, then fall
//! back to string, char and boolean ordering.

use std::cmp::Ordering;

use bigdecimal::{BigDecimal, RoundingMode};
use el_ir::BinaryOp;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::coerce::{
    is_dot_ee, is_floating, is_numeric, test, to_big_decimal, to_big_int, to_boolean, to_double,
    to_long, to_string,
};
use crate::context::EvalContext;
use crate::errors::{
    cannot_apply_operator, division_by_zero, not_a_type, values_not_comparable, EvalResult,
};
use crate::Value;

/// Numeric class both operands are promoted to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum NumClass {
    BigDecimal,
    Double,
    BigInt,
    Long,
}

fn is_big_decimal(v: &Value) -> bool {
    matches!(v, Value::BigDecimal(_))
}

fn is_big_int(v: &Value) -> bool {
    matches!(v, Value::BigInt(_))
}

/// Class for `+ - * %`, where floating-looking strings count as floating.
fn arith_class(left: &Value, right: &Value) -> NumClass {
    let floating = |v: &Value| is_floating(v) || is_dot_ee(v);
    if is_big_decimal(left) || is_big_decimal(right) {
        NumClass::BigDecimal
    } else if floating(left) || floating(right) {
        if is_big_int(left) || is_big_int(right) {
            NumClass::BigDecimal
        } else {
            NumClass::Double
        }
    } else if is_big_int(left) || is_big_int(right) {
        NumClass::BigInt
    } else {
        NumClass::Long
    }
}

/// Class for `==` and ordering.
fn compare_class(left: &Value, right: &Value) -> NumClass {
    if is_big_decimal(left) || is_big_decimal(right) {
        NumClass::BigDecimal
    } else if is_floating(left) || is_floating(right) {
        NumClass::Double
    } else if is_big_int(left) || is_big_int(right) {
        NumClass::BigInt
    } else {
        NumClass::Long
    }
}

// Direct Dispatch Function

/// Evaluate a binary operation on two already evaluated operands.
///
/// `&&` and `||` are handled here without short-circuiting; the evaluator
/// short-circuits before it gets this far.
pub fn evaluate_binary(
    ctx: &dyn EvalContext,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult {
    match op {
        BinaryOp::Add => add(ctx, left, right),
        BinaryOp::Sub | BinaryOp::Mul => arithmetic(ctx, op, left, right),
        BinaryOp::Div => divide(ctx, left, right),
        BinaryOp::Mod => remainder(ctx, left, right),
        BinaryOp::Eq => equals(ctx, left, right).map(Value::Bool),
        BinaryOp::NotEq => equals(ctx, left, right).map(|eq| Value::Bool(!eq)),
        BinaryOp::Compare => three_way(ctx, left, right),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            relational(ctx, op, left, right).map(Value::Bool)
        }
        BinaryOp::Contains => contains(ctx, left, right).map(Value::Bool),
        BinaryOp::StartsWith => Ok(Value::Bool(affix(ctx, left, right, |s, p| {
            s.starts_with(p)
        }))),
        BinaryOp::EndsWith => Ok(Value::Bool(affix(ctx, left, right, |s, p| s.ends_with(p)))),
        BinaryOp::InstanceOf => instance_of(ctx, left, right),
        BinaryOp::And => Ok(Value::Bool(test(left) && test(right))),
        BinaryOp::Or => Ok(Value::Bool(test(left) || test(right))),
    }
}

// Arithmetic

fn add(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult {
    if left.is_null() && right.is_null() {
        return Ok(Value::Long(0));
    }
    if is_numeric(left) || is_numeric(right) {
        return arithmetic(ctx, BinaryOp::Add, left, right);
    }
    let mut text = to_string(ctx, left);
    text.push_str(&to_string(ctx, right));
    Ok(Value::string(text))
}

/// `+ - *` on numbers.
fn arithmetic(ctx: &dyn EvalContext, op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    if left.is_null() && right.is_null() {
        return Ok(Value::Long(0));
    }
    match arith_class(left, right) {
        NumClass::BigDecimal => {
            let (l, r) = (to_big_decimal(ctx, left)?, to_big_decimal(ctx, right)?);
            Ok(Value::big_decimal(match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                _ => l * r,
            }))
        }
        NumClass::Double => {
            let (l, r) = (to_double(ctx, left)?, to_double(ctx, right)?);
            Ok(Value::Double(match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                _ => l * r,
            }))
        }
        NumClass::BigInt => {
            let (l, r) = (to_big_int(ctx, left)?, to_big_int(ctx, right)?);
            Ok(Value::big_int(match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                _ => l * r,
            }))
        }
        NumClass::Long => {
            let (l, r) = (to_long(ctx, left)?, to_long(ctx, right)?);
            let checked = match op {
                BinaryOp::Add => l.checked_add(r),
                BinaryOp::Sub => l.checked_sub(r),
                _ => l.checked_mul(r),
            };
            Ok(checked.map_or_else(
                || {
                    let (l, r) = (BigInt::from(l), BigInt::from(r));
                    Value::big_int(match op {
                        BinaryOp::Add => l + r,
                        BinaryOp::Sub => l - r,
                        _ => l * r,
                    })
                },
                Value::Long,
            ))
        }
    }
}

fn divide(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult {
    if left.is_null() && right.is_null() {
        return Ok(Value::Long(0));
    }
    let big = |v: &Value| is_big_decimal(v) || is_big_int(v);
    if big(left) || big(right) {
        let (l, r) = (to_big_decimal(ctx, left)?, to_big_decimal(ctx, right)?);
        return divide_big_decimal(&l, &r).map(Value::big_decimal);
    }
    Ok(Value::Double(to_double(ctx, left)? / to_double(ctx, right)?))
}

/// Quotient rounded half-up to the dividend's scale.
fn divide_big_decimal(dividend: &BigDecimal, divisor: &BigDecimal) -> EvalResult<BigDecimal> {
    if divisor.is_zero() {
        return Err(division_by_zero());
    }
    let (_, scale) = dividend.as_bigint_and_exponent();
    Ok((dividend / divisor).with_scale_round(scale, RoundingMode::HalfUp))
}

fn remainder(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult {
    if left.is_null() && right.is_null() {
        return Ok(Value::Long(0));
    }
    match arith_class(left, right) {
        NumClass::BigDecimal | NumClass::Double => {
            Ok(Value::Double(to_double(ctx, left)? % to_double(ctx, right)?))
        }
        NumClass::BigInt => {
            let (l, r) = (to_big_int(ctx, left)?, to_big_int(ctx, right)?);
            if r.is_zero() {
                return Err(division_by_zero());
            }
            Ok(Value::big_int(l % r))
        }
        NumClass::Long => {
            let (l, r) = (to_long(ctx, left)?, to_long(ctx, right)?);
            if r == 0 {
                return Err(division_by_zero());
            }
            Ok(Value::Long(l.wrapping_rem(r)))
        }
    }
}

// Equality

/// `==` with promotion.
pub fn equals(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult<bool> {
    if left == right {
        return Ok(true);
    }
    if left.is_null() || right.is_null() {
        return Ok(false);
    }
    if matches!(left, Value::Bool(_)) || matches!(right, Value::Bool(_)) {
        return Ok(to_boolean(ctx, left)? == to_boolean(ctx, right)?);
    }
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(to_string(ctx, left) == to_string(ctx, right));
    }
    if is_numeric(left) || is_numeric(right) {
        return Ok(compare_numbers(ctx, left, right)? == Some(Ordering::Equal));
    }
    Ok(false)
}

// Ordering

fn compare_numbers(
    ctx: &dyn EvalContext,
    left: &Value,
    right: &Value,
) -> EvalResult<Option<Ordering>> {
    Ok(match compare_class(left, right) {
        NumClass::BigDecimal => Some(to_big_decimal(ctx, left)?.cmp(&to_big_decimal(ctx, right)?)),
        NumClass::Double => to_double(ctx, left)?.partial_cmp(&to_double(ctx, right)?),
        NumClass::BigInt => Some(to_big_int(ctx, left)?.cmp(&to_big_int(ctx, right)?)),
        NumClass::Long => Some(to_long(ctx, left)?.cmp(&to_long(ctx, right)?)),
    })
}

/// Order two non-null values. `None` means unordered (a NaN was involved).
pub fn compare(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult<Option<Ordering>> {
    if is_numeric(left) || is_numeric(right) {
        return compare_numbers(ctx, left, right);
    }
    match (left, right) {
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Ok(Some(to_string(ctx, left).cmp(&to_string(ctx, right))))
        }
        (Value::Char(a), Value::Char(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ => Err(values_not_comparable(left.type_name(), right.type_name())),
    }
}

fn relational(ctx: &dyn EvalContext, op: BinaryOp, left: &Value, right: &Value) -> EvalResult<bool> {
    match (left.is_null(), right.is_null()) {
        (true, true) => return Ok(matches!(op, BinaryOp::LtEq | BinaryOp::GtEq)),
        (true, false) | (false, true) => return Ok(false),
        (false, false) => {}
    }
    let Some(ordering) = compare(ctx, left, right)? else {
        return Ok(false);
    };
    Ok(match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        _ => ordering.is_ge(),
    })
}

/// `<=>`: -1, 0 or 1, with null sorting first.
fn three_way(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult {
    let ordering = match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare(ctx, left, right)?
            .ok_or_else(|| values_not_comparable(left.type_name(), right.type_name()))?,
    };
    Ok(Value::Int(ordering as i32))
}

// Word Operators

fn contains(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult<bool> {
    match left {
        Value::Null => Ok(false),
        Value::Str(s) => Ok(!right.is_null() && s.contains(to_string(ctx, right).as_str())),
        Value::List(items) => any_equal(ctx, items.iter().cloned(), right),
        Value::Map(entries) => Ok(!right.is_null() && entries.contains_key(&to_string(ctx, right))),
        Value::Object(obj) => {
            if let Some(map) = obj.as_map() {
                return Ok(!right.is_null() && map.contains_key(&to_string(ctx, right)));
            }
            if let Some(indexed) = obj.as_indexed() {
                return any_equal(ctx, (0..indexed.len()).filter_map(|i| indexed.get(i)), right);
            }
            Err(cannot_apply_operator(
                BinaryOp::Contains.as_symbol(),
                left.type_name(),
                right.type_name(),
            ))
        }
        _ => Err(cannot_apply_operator(
            BinaryOp::Contains.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn any_equal(
    ctx: &dyn EvalContext,
    items: impl Iterator<Item = Value>,
    needle: &Value,
) -> EvalResult<bool> {
    for item in items {
        if equals(ctx, &item, needle)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `startsWith` / `endsWith` on display strings. Null on either side is false.
fn affix(
    ctx: &dyn EvalContext,
    left: &Value,
    right: &Value,
    check: impl FnOnce(&str, &str) -> bool,
) -> bool {
    if left.is_null() || right.is_null() {
        return false;
    }
    check(&to_string(ctx, left), &to_string(ctx, right))
}

fn instance_of(ctx: &dyn EvalContext, left: &Value, right: &Value) -> EvalResult {
    match right {
        Value::Type(name) => Ok(Value::Bool(ctx.is_instance(left, name))),
        other => Err(not_a_type(other.type_name())),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
