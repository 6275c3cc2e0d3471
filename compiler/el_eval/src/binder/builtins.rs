//! `el.lang` bindings every [`TypeBinder::with_builtins`] starts with.

use crate::context::EmptyContext;
use crate::errors::HostError;
use crate::host::{function, method};
use crate::Value;

use super::TypeBinder;

const STRING: &str = "el.lang.String";
const LIST: &str = "el.lang.List";
const MAP: &str = "el.lang.Map";
const NUMBER: &str = "el.lang.Number";
const OBJECT: &str = "el.lang.Object";

pub(super) fn register(binder: &mut TypeBinder) {
    register_object(binder);
    register_string(binder);
    register_list(binder);
    register_map(binder);
    register_number(binder);
    register_statics(binder);
}

// Argument helpers

fn require_args(name: &str, expected: usize, args: &[Value]) -> Result<(), HostError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(format!("{name} expects {expected} argument(s), got {}", args.len()).into())
    }
}

fn str_arg<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a str, HostError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("{name} expects a string at position {index}").into())
}

fn int_arg(name: &str, args: &[Value], index: usize) -> Result<i64, HostError> {
    match args.get(index) {
        Some(Value::Byte(v)) => Ok(i64::from(*v)),
        Some(Value::Short(v)) => Ok(i64::from(*v)),
        Some(Value::Int(v)) => Ok(i64::from(*v)),
        Some(Value::Long(v)) => Ok(*v),
        _ => Err(format!("{name} expects an integer at position {index}").into()),
    }
}

fn receiver_str<'a>(name: &str, receiver: &'a Value) -> Result<&'a str, HostError> {
    receiver
        .as_str()
        .ok_or_else(|| format!("{name} called on {}", receiver.type_name()).into())
}

fn len_to_value(len: usize) -> Result<Value, HostError> {
    i32::try_from(len)
        .map(Value::Int)
        .map_err(|_| "length exceeds el.lang.Integer range".into())
}

/// Char offset of a byte offset, as an `Int`.
fn index_to_value(haystack: &str, byte_index: Option<usize>) -> Result<Value, HostError> {
    match byte_index {
        Some(i) => len_to_value(haystack[..i].chars().count()),
        None => Ok(Value::Int(-1)),
    }
}

fn char_range(name: &str, s: &str, begin: i64, end: i64) -> Result<String, HostError> {
    let len = s.chars().count();
    let in_range = |i: i64| usize::try_from(i).ok().filter(|&i| i <= len);
    match (in_range(begin), in_range(end)) {
        (Some(b), Some(e)) if b <= e => Ok(s.chars().skip(b).take(e - b).collect()),
        _ => Err(format!("{name}: range {begin}..{end} out of bounds for length {len}").into()),
    }
}

// Bindings

fn register_object(binder: &mut TypeBinder) {
    binder
        .add_method(
            OBJECT,
            "toString",
            method(|receiver, args| {
                require_args("toString", 0, args)?;
                Ok(Value::string(receiver.to_string()))
            }),
        )
        .add_method(
            OBJECT,
            "equals",
            method(|receiver, args| {
                require_args("equals", 1, args)?;
                Ok(Value::Bool(*receiver == args[0]))
            }),
        );
}

fn register_string(binder: &mut TypeBinder) {
    binder
        .add_getter(STRING, "empty", |receiver| {
            Ok(Value::Bool(receiver_str("empty", receiver)?.is_empty()))
        })
        .add_method(
            STRING,
            "length",
            method(|receiver, args| {
                require_args("length", 0, args)?;
                len_to_value(receiver_str("length", receiver)?.chars().count())
            }),
        )
        .add_method(
            STRING,
            "isEmpty",
            method(|receiver, args| {
                require_args("isEmpty", 0, args)?;
                Ok(Value::Bool(receiver_str("isEmpty", receiver)?.is_empty()))
            }),
        )
        .add_method(
            STRING,
            "toUpperCase",
            method(|receiver, args| {
                require_args("toUpperCase", 0, args)?;
                Ok(Value::string(receiver_str("toUpperCase", receiver)?.to_uppercase()))
            }),
        )
        .add_method(
            STRING,
            "toLowerCase",
            method(|receiver, args| {
                require_args("toLowerCase", 0, args)?;
                Ok(Value::string(receiver_str("toLowerCase", receiver)?.to_lowercase()))
            }),
        )
        .add_method(
            STRING,
            "trim",
            method(|receiver, args| {
                require_args("trim", 0, args)?;
                Ok(Value::string(receiver_str("trim", receiver)?.trim()))
            }),
        )
        .add_method(
            STRING,
            "substring",
            method(|receiver, args| {
                let s = receiver_str("substring", receiver)?;
                let begin = int_arg("substring", args, 0)?;
                let end = match args.len() {
                    1 => i64::try_from(s.chars().count())?,
                    2 => int_arg("substring", args, 1)?,
                    n => return Err(format!("substring expects 1 or 2 arguments, got {n}").into()),
                };
                char_range("substring", s, begin, end).map(Value::string)
            }),
        )
        .add_method(
            STRING,
            "charAt",
            method(|receiver, args| {
                require_args("charAt", 1, args)?;
                let s = receiver_str("charAt", receiver)?;
                let index = int_arg("charAt", args, 0)?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| s.chars().nth(i))
                    .map(Value::Char)
                    .ok_or_else(|| format!("charAt: index {index} out of bounds").into())
            }),
        )
        .add_method(
            STRING,
            "indexOf",
            method(|receiver, args| {
                require_args("indexOf", 1, args)?;
                let s = receiver_str("indexOf", receiver)?;
                index_to_value(s, s.find(str_arg("indexOf", args, 0)?))
            }),
        )
        .add_method(
            STRING,
            "lastIndexOf",
            method(|receiver, args| {
                require_args("lastIndexOf", 1, args)?;
                let s = receiver_str("lastIndexOf", receiver)?;
                index_to_value(s, s.rfind(str_arg("lastIndexOf", args, 0)?))
            }),
        )
        .add_method(
            STRING,
            "startsWith",
            method(|receiver, args| {
                require_args("startsWith", 1, args)?;
                let s = receiver_str("startsWith", receiver)?;
                Ok(Value::Bool(s.starts_with(str_arg("startsWith", args, 0)?)))
            }),
        )
        .add_method(
            STRING,
            "endsWith",
            method(|receiver, args| {
                require_args("endsWith", 1, args)?;
                let s = receiver_str("endsWith", receiver)?;
                Ok(Value::Bool(s.ends_with(str_arg("endsWith", args, 0)?)))
            }),
        )
        .add_method(
            STRING,
            "contains",
            method(|receiver, args| {
                require_args("contains", 1, args)?;
                let s = receiver_str("contains", receiver)?;
                Ok(Value::Bool(s.contains(str_arg("contains", args, 0)?)))
            }),
        )
        .add_method(
            STRING,
            "replace",
            method(|receiver, args| {
                require_args("replace", 2, args)?;
                let s = receiver_str("replace", receiver)?;
                let from = str_arg("replace", args, 0)?;
                let to = str_arg("replace", args, 1)?;
                Ok(Value::string(s.replace(from, to)))
            }),
        )
        .add_method(
            STRING,
            "concat",
            method(|receiver, args| {
                require_args("concat", 1, args)?;
                let s = receiver_str("concat", receiver)?;
                Ok(Value::string(format!("{s}{}", str_arg("concat", args, 0)?)))
            }),
        )
        .add_method(
            STRING,
            "equalsIgnoreCase",
            method(|receiver, args| {
                require_args("equalsIgnoreCase", 1, args)?;
                let s = receiver_str("equalsIgnoreCase", receiver)?;
                let other = args[0].as_str();
                Ok(Value::Bool(other.is_some_and(|o| {
                    s.to_lowercase() == o.to_lowercase()
                })))
            }),
        )
        .add_method(
            STRING,
            "split",
            method(|receiver, args| {
                require_args("split", 1, args)?;
                let s = receiver_str("split", receiver)?;
                let sep = str_arg("split", args, 0)?;
                Ok(Value::list(s.split(sep).map(Value::string).collect()))
            }),
        );
}

fn register_list(binder: &mut TypeBinder) {
    binder
        .add_getter(LIST, "empty", |receiver| match receiver {
            Value::List(items) => Ok(Value::Bool(items.is_empty())),
            other => Err(format!("empty called on {}", other.type_name()).into()),
        })
        .add_method(
            LIST,
            "size",
            method(|receiver, args| {
                require_args("size", 0, args)?;
                match receiver {
                    Value::List(items) => len_to_value(items.len()),
                    other => Err(format!("size called on {}", other.type_name()).into()),
                }
            }),
        )
        .add_method(
            LIST,
            "isEmpty",
            method(|receiver, args| {
                require_args("isEmpty", 0, args)?;
                Ok(Value::Bool(matches!(receiver, Value::List(items) if items.is_empty())))
            }),
        )
        .add_method(
            LIST,
            "get",
            method(|receiver, args| {
                require_args("get", 1, args)?;
                let index = int_arg("get", args, 0)?;
                let Value::List(items) = receiver else {
                    return Err(format!("get called on {}", receiver.type_name()).into());
                };
                usize::try_from(index)
                    .ok()
                    .and_then(|i| items.get(i))
                    .cloned()
                    .ok_or_else(|| {
                        format!("index {index} out of bounds for length {}", items.len()).into()
                    })
            }),
        )
        .add_method(
            LIST,
            "contains",
            method(|receiver, args| {
                require_args("contains", 1, args)?;
                Ok(Value::Bool(
                    matches!(receiver, Value::List(items) if items.contains(&args[0])),
                ))
            }),
        )
        .add_method(
            LIST,
            "indexOf",
            method(|receiver, args| {
                require_args("indexOf", 1, args)?;
                let Value::List(items) = receiver else {
                    return Ok(Value::Int(-1));
                };
                match items.iter().position(|item| *item == args[0]) {
                    Some(i) => len_to_value(i),
                    None => Ok(Value::Int(-1)),
                }
            }),
        );
}

fn register_map(binder: &mut TypeBinder) {
    binder
        .add_method(
            MAP,
            "size",
            method(|receiver, args| {
                require_args("size", 0, args)?;
                match receiver {
                    Value::Map(entries) => len_to_value(entries.len()),
                    other => Err(format!("size called on {}", other.type_name()).into()),
                }
            }),
        )
        .add_method(
            MAP,
            "isEmpty",
            method(|receiver, args| {
                require_args("isEmpty", 0, args)?;
                Ok(Value::Bool(matches!(receiver, Value::Map(entries) if entries.is_empty())))
            }),
        )
        .add_method(
            MAP,
            "get",
            method(|receiver, args| {
                require_args("get", 1, args)?;
                let key = str_arg("get", args, 0)?;
                Ok(match receiver {
                    Value::Map(entries) => entries.get(key).cloned().unwrap_or(Value::Null),
                    _ => Value::Null,
                })
            }),
        )
        .add_method(
            MAP,
            "containsKey",
            method(|receiver, args| {
                require_args("containsKey", 1, args)?;
                let key = str_arg("containsKey", args, 0)?;
                Ok(Value::Bool(
                    matches!(receiver, Value::Map(entries) if entries.contains_key(key)),
                ))
            }),
        )
        .add_method(
            MAP,
            "keySet",
            method(|receiver, args| {
                require_args("keySet", 0, args)?;
                let Value::Map(entries) = receiver else {
                    return Ok(Value::list(Vec::new()));
                };
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();
                Ok(Value::list(
                    keys.into_iter().map(|k| Value::string(k.as_str())).collect(),
                ))
            }),
        );
}

fn number_receiver(name: &str, receiver: &Value) -> Result<f64, HostError> {
    crate::coerce::to_double(&EmptyContext, receiver)
        .map_err(|_| format!("{name} called on {}", receiver.type_name()).into())
}

fn long_receiver(name: &str, receiver: &Value) -> Result<i64, HostError> {
    crate::coerce::to_long(&EmptyContext, receiver)
        .map_err(|_| format!("{name} called on {}", receiver.type_name()).into())
}

fn register_number(binder: &mut TypeBinder) {
    binder
        .add_method(
            NUMBER,
            "intValue",
            method(|receiver, args| {
                require_args("intValue", 0, args)?;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "intValue narrows like an int cast"
                )]
                let narrowed = long_receiver("intValue", receiver)? as i32;
                Ok(Value::Int(narrowed))
            }),
        )
        .add_method(
            NUMBER,
            "longValue",
            method(|receiver, args| {
                require_args("longValue", 0, args)?;
                long_receiver("longValue", receiver).map(Value::Long)
            }),
        )
        .add_method(
            NUMBER,
            "doubleValue",
            method(|receiver, args| {
                require_args("doubleValue", 0, args)?;
                number_receiver("doubleValue", receiver).map(Value::Double)
            }),
        );
}

fn parse_arg<T: std::str::FromStr>(name: &str, args: &[Value]) -> Result<T, HostError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    require_args(name, 1, args)?;
    Ok(str_arg(name, args, 0)?.trim().parse::<T>()?)
}

fn register_statics(binder: &mut TypeBinder) {
    const INTEGER: &str = "el.lang.Integer";
    const LONG: &str = "el.lang.Long";
    const DOUBLE: &str = "el.lang.Double";
    const BOOLEAN: &str = "el.lang.Boolean";

    binder
        .add_static_field(INTEGER, "MAX_VALUE", i32::MAX)
        .add_static_field(INTEGER, "MIN_VALUE", i32::MIN)
        .add_static_method(
            INTEGER,
            "parseInt",
            function(|args| parse_arg::<i32>("parseInt", args).map(Value::Int)),
        )
        .add_static_field(LONG, "MAX_VALUE", i64::MAX)
        .add_static_field(LONG, "MIN_VALUE", i64::MIN)
        .add_static_method(
            LONG,
            "parseLong",
            function(|args| parse_arg::<i64>("parseLong", args).map(Value::Long)),
        )
        .add_static_method(
            DOUBLE,
            "parseDouble",
            function(|args| parse_arg::<f64>("parseDouble", args).map(Value::Double)),
        )
        .add_static_field(BOOLEAN, "TRUE", true)
        .add_static_field(BOOLEAN, "FALSE", false)
        .add_static_method(
            BOOLEAN,
            "parseBoolean",
            function(|args| {
                require_args("parseBoolean", 1, args)?;
                let s = args[0].as_str().unwrap_or_default();
                Ok(Value::Bool(s.eq_ignore_ascii_case("true")))
            }),
        )
        .add_static_method(
            STRING,
            "valueOf",
            function(|args| {
                require_args("valueOf", 1, args)?;
                Ok(Value::string(args[0].to_string()))
            }),
        );
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
