//! Runtime values.
//!
//! Scalars are stored inline; strings, collections, big numbers and host
//! objects sit behind `Arc`, so cloning a `Value` never copies a payload.
//! Build heap values through the factory methods (`Value::string`,
//! `Value::list`, ...) rather than wrapping `Arc`s by hand.

mod runtime_type;

use std::fmt;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use el_ir::Literal;
use num_bigint::BigInt;
use rustc_hash::FxHashMap;

use crate::host::HostObject;

pub use runtime_type::RuntimeType;

/// Dynamically typed result of evaluating an expression.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(Arc<BigInt>),
    BigDecimal(Arc<BigDecimal>),
    Str(Arc<str>),
    List(Arc<Vec<Value>>),
    Map(Arc<FxHashMap<String, Value>>),
    /// Class literal produced by `T(Name)`, holding the qualified name.
    Type(Arc<str>),
    Object(Arc<dyn HostObject>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    #[inline]
    pub fn big_int(v: BigInt) -> Self {
        Value::BigInt(Arc::new(v))
    }

    #[inline]
    pub fn big_decimal(v: BigDecimal) -> Self {
        Value::BigDecimal(Arc::new(v))
    }

    #[inline]
    pub fn type_ref(name: impl Into<Arc<str>>) -> Self {
        Value::Type(name.into())
    }

    pub fn object(obj: impl HostObject + 'static) -> Self {
        Value::Object(Arc::new(obj))
    }

    /// Value of a literal node.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(v) => Value::Int(*v),
            Literal::Long(v) => Value::Long(*v),
            Literal::BigInt(v) => Value::big_int((**v).clone()),
            Literal::Float(v) => Value::Float(*v),
            Literal::Double(v) => Value::Double(*v),
            Literal::Str(s) => Value::Str(Arc::clone(s)),
        }
    }
}

// Queries

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Qualified name of this value's runtime type.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "el.lang.Boolean",
            Value::Char(_) => "el.lang.Character",
            Value::Byte(_) => "el.lang.Byte",
            Value::Short(_) => "el.lang.Short",
            Value::Int(_) => "el.lang.Integer",
            Value::Long(_) => "el.lang.Long",
            Value::Float(_) => "el.lang.Float",
            Value::Double(_) => "el.lang.Double",
            Value::BigInt(_) => "el.lang.BigInteger",
            Value::BigDecimal(_) => "el.lang.BigDecimal",
            Value::Str(_) => "el.lang.String",
            Value::List(_) => "el.lang.List",
            Value::Map(_) => "el.lang.Map",
            Value::Type(_) => "el.lang.Class",
            Value::Object(obj) => obj.type_name(),
        }
    }
}

impl PartialEq for Value {
    #[expect(
        clippy::float_cmp,
        reason = "structural equality follows IEEE comparison"
    )]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::BigDecimal(a), Value::BigDecimal(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Generic stringification, used for string concatenation and templates.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Double(v) => write!(f, "{v:?}"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::BigDecimal(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();
                f.write_str("{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={}", entries[key])?;
                }
                f.write_str("}")
            }
            Value::Type(name) => write!(f, "class {name}"),
            Value::Object(obj) => f.write_str(&obj.to_display_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::string(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::big_int(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::big_decimal(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::list(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
