//! Type coercion.
//!
//! Numeric promotion is rank based: `BigDecimal > BigInteger > double >
//! long`. Each `to_*` function converts any value to one rank:
//!
//! - null and `""` give the rank's zero
//! - booleans give one or zero
//! - chars give their ordinal
//! - other numbers convert directly (floating to integral truncates)
//! - anything else goes through [`EvalContext::convert`]
//!
//! [`test`] is the truthiness behind `!`, `&&`, `||` and `?:`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::context::EvalContext;
use crate::errors::{conversion_failed, EvalResult};
use crate::Value;

/// Target of a host conversion request.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConvertTarget {
    Long,
    Double,
    BigInt,
    BigDecimal,
    Boolean,
    String,
}

impl ConvertTarget {
    pub const fn type_name(self) -> &'static str {
        match self {
            ConvertTarget::Long => "el.lang.Long",
            ConvertTarget::Double => "el.lang.Double",
            ConvertTarget::BigInt => "el.lang.BigInteger",
            ConvertTarget::BigDecimal => "el.lang.BigDecimal",
            ConvertTarget::Boolean => "el.lang.Boolean",
            ConvertTarget::String => "el.lang.String",
        }
    }
}

/// Any numeric type, boxed or big.
pub fn is_numeric(value: &Value) -> bool {
    matches!(
        value,
        Value::Byte(_)
            | Value::Short(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_)
            | Value::BigInt(_)
            | Value::BigDecimal(_)
    )
}

pub fn is_floating(value: &Value) -> bool {
    matches!(value, Value::Float(_) | Value::Double(_))
}

/// A string that looks like a floating point literal.
pub fn is_dot_ee(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.contains(['.', 'e', 'E']))
}

fn is_zero_source(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        _ => false,
    }
}

pub fn to_long(ctx: &dyn EvalContext, value: &Value) -> EvalResult<i64> {
    if is_zero_source(value) {
        return Ok(0);
    }
    let converted = match value {
        Value::Long(v) => return Ok(*v),
        Value::Bool(b) => return Ok(i64::from(*b)),
        Value::Char(c) => return Ok(i64::from(u32::from(*c))),
        Value::Byte(v) => return Ok(i64::from(*v)),
        Value::Short(v) => return Ok(i64::from(*v)),
        Value::Int(v) => return Ok(i64::from(*v)),
        #[expect(
            clippy::cast_possible_truncation,
            reason = "floating to integral conversion truncates"
        )]
        Value::Float(v) => return Ok(*v as i64),
        #[expect(
            clippy::cast_possible_truncation,
            reason = "floating to integral conversion truncates"
        )]
        Value::Double(v) => return Ok(*v as i64),
        Value::BigInt(v) => v.to_i64(),
        Value::BigDecimal(v) => v.to_i64(),
        _ => match ctx.convert(value, ConvertTarget::Long)? {
            Value::Long(v) => Some(v),
            _ => None,
        },
    };
    converted.ok_or_else(|| conversion_failed(&value.to_string(), ConvertTarget::Long.type_name()))
}

pub fn to_double(ctx: &dyn EvalContext, value: &Value) -> EvalResult<f64> {
    if is_zero_source(value) {
        return Ok(0.0);
    }
    let converted = match value {
        Value::Double(v) => return Ok(*v),
        Value::Float(v) => return Ok(f64::from(*v)),
        Value::Bool(b) => return Ok(if *b { 1.0 } else { 0.0 }),
        Value::Byte(v) => return Ok(f64::from(*v)),
        Value::Short(v) => return Ok(f64::from(*v)),
        Value::Int(v) => return Ok(f64::from(*v)),
        #[expect(
            clippy::cast_precision_loss,
            reason = "long to double conversion rounds"
        )]
        Value::Long(v) => return Ok(*v as f64),
        Value::BigInt(v) => v.to_f64(),
        Value::BigDecimal(v) => v.to_f64(),
        Value::Char(c) => return Ok(f64::from(u32::from(*c))),
        Value::Str(s) => s.trim().parse::<f64>().ok(),
        _ => match ctx.convert(value, ConvertTarget::Double)? {
            Value::Double(v) => Some(v),
            _ => None,
        },
    };
    converted
        .ok_or_else(|| conversion_failed(&value.to_string(), ConvertTarget::Double.type_name()))
}

pub fn to_big_int(ctx: &dyn EvalContext, value: &Value) -> EvalResult<BigInt> {
    if is_zero_source(value) {
        return Ok(BigInt::zero());
    }
    let converted = match value {
        Value::BigInt(v) => return Ok((**v).clone()),
        Value::Bool(b) => return Ok(BigInt::from(u8::from(*b))),
        Value::Char(c) => return Ok(BigInt::from(u32::from(*c))),
        Value::Byte(v) => return Ok(BigInt::from(*v)),
        Value::Short(v) => return Ok(BigInt::from(*v)),
        Value::Int(v) => return Ok(BigInt::from(*v)),
        Value::Long(v) => return Ok(BigInt::from(*v)),
        Value::Float(v) => BigInt::from_f32(v.trunc()),
        Value::Double(v) => BigInt::from_f64(v.trunc()),
        Value::BigDecimal(v) => Some(v.with_scale(0).into_bigint_and_exponent().0),
        _ => match ctx.convert(value, ConvertTarget::BigInt)? {
            Value::BigInt(v) => Some((*v).clone()),
            _ => None,
        },
    };
    converted
        .ok_or_else(|| conversion_failed(&value.to_string(), ConvertTarget::BigInt.type_name()))
}

pub fn to_big_decimal(ctx: &dyn EvalContext, value: &Value) -> EvalResult<BigDecimal> {
    if is_zero_source(value) {
        return Ok(BigDecimal::zero());
    }
    let converted = match value {
        Value::BigDecimal(v) => return Ok((**v).clone()),
        Value::BigInt(v) => return Ok(BigDecimal::from((**v).clone())),
        Value::Bool(b) => return Ok(BigDecimal::from(u8::from(*b))),
        Value::Char(c) => return Ok(BigDecimal::from(u32::from(*c))),
        Value::Byte(v) => return Ok(BigDecimal::from(*v)),
        Value::Short(v) => return Ok(BigDecimal::from(*v)),
        Value::Int(v) => return Ok(BigDecimal::from(*v)),
        Value::Long(v) => return Ok(BigDecimal::from(*v)),
        Value::Float(v) => BigDecimal::from_f32(*v),
        Value::Double(v) => BigDecimal::from_f64(*v),
        Value::Str(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => match ctx.convert(value, ConvertTarget::BigDecimal)? {
            Value::BigDecimal(v) => Some((*v).clone()),
            _ => None,
        },
    };
    converted.ok_or_else(|| {
        conversion_failed(&value.to_string(), ConvertTarget::BigDecimal.type_name())
    })
}

/// Strict boolean conversion, used when comparing against a `Bool`.
///
/// Numbers are true when non-zero; everything else asks the context.
pub fn to_boolean(ctx: &dyn EvalContext, value: &Value) -> EvalResult<bool> {
    if let Value::Bool(b) = value {
        return Ok(*b);
    }
    if is_numeric(value) {
        return Ok(!is_zero_number(value));
    }
    match ctx.convert(value, ConvertTarget::Boolean)? {
        Value::Bool(b) => Ok(b),
        _ => Err(conversion_failed(
            &value.to_string(),
            ConvertTarget::Boolean.type_name(),
        )),
    }
}

/// Strings pass through; everything else uses the context's stringification.
pub fn to_string(ctx: &dyn EvalContext, value: &Value) -> String {
    match value {
        Value::Str(s) => s.to_string(),
        other => ctx.to_display_string(other),
    }
}

/// Truthiness.
pub fn test(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Str(s) => !s.is_empty(),
        Value::List(items) => !items.is_empty(),
        Value::Map(entries) => !entries.is_empty(),
        v if is_numeric(v) => !is_zero_number(v),
        _ => true,
    }
}

fn is_zero_number(value: &Value) -> bool {
    match value {
        Value::Byte(v) => *v == 0,
        Value::Short(v) => *v == 0,
        Value::Int(v) => *v == 0,
        Value::Long(v) => *v == 0,
        Value::Float(v) => *v == 0.0,
        Value::Double(v) => *v == 0.0,
        Value::BigInt(v) => v.is_zero(),
        Value::BigDecimal(v) => v.is_zero(),
        _ => false,
    }
}

/// Fallback conversion used by contexts that don't know better.
///
/// Strings parse in the target's literal syntax; host objects convert to
/// strings only.
pub fn default_convert(value: &Value, target: ConvertTarget) -> EvalResult<Value> {
    let converted = match (target, value) {
        (ConvertTarget::String, v) => Some(Value::string(v.to_string())),
        (ConvertTarget::Boolean, Value::Str(s)) => Some(Value::Bool(s.eq_ignore_ascii_case("true"))),
        (ConvertTarget::Long, Value::Str(s)) => s.trim().parse::<i64>().ok().map(Value::Long),
        (ConvertTarget::Double, Value::Str(s)) => s.trim().parse::<f64>().ok().map(Value::Double),
        (ConvertTarget::BigInt, Value::Str(s)) => {
            BigInt::from_str(s.trim()).ok().map(Value::big_int)
        }
        (ConvertTarget::BigDecimal, Value::Str(s)) => {
            BigDecimal::from_str(s.trim()).ok().map(Value::big_decimal)
        }
        _ => None,
    };
    converted.ok_or_else(|| conversion_failed(&value.to_string(), target.type_name()))
}
