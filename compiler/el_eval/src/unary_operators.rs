//! Unary operator implementations for the evaluator.
//!
//! Negation keeps the operand's width and widens on overflow
//! (`-Integer.MIN_VALUE` is a `Long`). Strings are parsed as `Double` when
//! they look floating and as `Long` otherwise; null counts as `0L`.

use el_ir::UnaryOp;
use num_bigint::BigInt;

use crate::coerce::{is_dot_ee, test, to_double, to_long};
use crate::context::EvalContext;
use crate::errors::{cannot_apply_bit_not, cannot_apply_minus, cannot_apply_plus, EvalResult};
use crate::Value;

/// Evaluate a unary operation on an already evaluated operand.
pub fn evaluate_unary(ctx: &dyn EvalContext, op: UnaryOp, value: &Value) -> EvalResult {
    match op {
        UnaryOp::Neg => negate(ctx, value),
        UnaryOp::Plus => plus(ctx, value),
        UnaryOp::Not => Ok(Value::Bool(!test(value))),
        UnaryOp::BitNot => bit_not(value),
    }
}

/// Numeric value of a string operand.
fn parse_numeric(ctx: &dyn EvalContext, value: &Value) -> EvalResult {
    if is_dot_ee(value) {
        to_double(ctx, value).map(Value::Double)
    } else {
        to_long(ctx, value).map(Value::Long)
    }
}

fn negate(ctx: &dyn EvalContext, value: &Value) -> EvalResult {
    Ok(match value {
        Value::Null => Value::Long(0),
        Value::Byte(v) => v
            .checked_neg()
            .map_or_else(|| Value::Short(-i16::from(*v)), Value::Byte),
        Value::Short(v) => v
            .checked_neg()
            .map_or_else(|| Value::Int(-i32::from(*v)), Value::Short),
        Value::Int(v) => v
            .checked_neg()
            .map_or_else(|| Value::Long(-i64::from(*v)), Value::Int),
        Value::Long(v) => v
            .checked_neg()
            .map_or_else(|| Value::big_int(-BigInt::from(*v)), Value::Long),
        Value::Float(v) => Value::Float(-v),
        Value::Double(v) => Value::Double(-v),
        Value::BigInt(v) => Value::big_int(-(**v).clone()),
        Value::BigDecimal(v) => Value::big_decimal(-(**v).clone()),
        Value::Str(_) => return negate(ctx, &parse_numeric(ctx, value)?),
        other => return Err(cannot_apply_minus(other.type_name())),
    })
}

fn plus(ctx: &dyn EvalContext, value: &Value) -> EvalResult {
    match value {
        Value::Null => Ok(Value::Long(0)),
        Value::Byte(_)
        | Value::Short(_)
        | Value::Int(_)
        | Value::Long(_)
        | Value::Float(_)
        | Value::Double(_)
        | Value::BigInt(_)
        | Value::BigDecimal(_) => Ok(value.clone()),
        Value::Str(_) => parse_numeric(ctx, value),
        other => Err(cannot_apply_plus(other.type_name())),
    }
}

fn bit_not(value: &Value) -> EvalResult {
    match value {
        Value::Byte(v) => Ok(Value::Byte(!v)),
        Value::Short(v) => Ok(Value::Short(!v)),
        Value::Int(v) => Ok(Value::Int(!v)),
        Value::Long(v) => Ok(Value::Long(!v)),
        Value::BigInt(v) => Ok(Value::big_int(!&**v)),
        other => Err(cannot_apply_bit_not(other.type_name())),
    }
}
