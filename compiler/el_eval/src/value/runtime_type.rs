//! Runtime type tags, used as call-site cache keys.

use std::sync::Arc;

use super::Value;

/// Concrete runtime type of a [`Value`].
///
/// `Type` and `Object` carry their names, so two class literals (or two
/// host types) only match when the names agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    Null,
    Bool,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInt,
    BigDecimal,
    Str,
    List,
    Map,
    Type(Arc<str>),
    Object(Arc<str>),
}

impl RuntimeType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => RuntimeType::Null,
            Value::Bool(_) => RuntimeType::Bool,
            Value::Char(_) => RuntimeType::Char,
            Value::Byte(_) => RuntimeType::Byte,
            Value::Short(_) => RuntimeType::Short,
            Value::Int(_) => RuntimeType::Int,
            Value::Long(_) => RuntimeType::Long,
            Value::Float(_) => RuntimeType::Float,
            Value::Double(_) => RuntimeType::Double,
            Value::BigInt(_) => RuntimeType::BigInt,
            Value::BigDecimal(_) => RuntimeType::BigDecimal,
            Value::Str(_) => RuntimeType::Str,
            Value::List(_) => RuntimeType::List,
            Value::Map(_) => RuntimeType::Map,
            Value::Type(name) => RuntimeType::Type(Arc::clone(name)),
            Value::Object(obj) => RuntimeType::Object(Arc::from(obj.type_name())),
        }
    }

    /// Whether `value` has this runtime type. Does not allocate.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (RuntimeType::Null, Value::Null)
            | (RuntimeType::Bool, Value::Bool(_))
            | (RuntimeType::Char, Value::Char(_))
            | (RuntimeType::Byte, Value::Byte(_))
            | (RuntimeType::Short, Value::Short(_))
            | (RuntimeType::Int, Value::Int(_))
            | (RuntimeType::Long, Value::Long(_))
            | (RuntimeType::Float, Value::Float(_))
            | (RuntimeType::Double, Value::Double(_))
            | (RuntimeType::BigInt, Value::BigInt(_))
            | (RuntimeType::BigDecimal, Value::BigDecimal(_))
            | (RuntimeType::Str, Value::Str(_))
            | (RuntimeType::List, Value::List(_))
            | (RuntimeType::Map, Value::Map(_)) => true,
            (RuntimeType::Type(a), Value::Type(b)) => a == b,
            (RuntimeType::Object(a), Value::Object(obj)) => **a == *obj.type_name(),
            _ => false,
        }
    }
}
