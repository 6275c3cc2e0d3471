//! Composite templates.
//!
//! A template mixes literal text with `${expr}` blocks:
//! `"Hello ${user.name}, you have ${count} messages"`. `\${` writes a
//! literal `${`. The first `}` after a `${` closes it, so a block can't
//! contain `}` itself.
//!
//! A template consisting of exactly one block evaluates to that block's raw
//! value; anything else renders to a string, with null blocks rendering as
//! nothing.

use std::fmt;

use el_eval::coerce::to_string;
use el_eval::{CompiledExpression, EvalContext, EvalResult, Value};

use crate::error::Result;

pub const PREFIX: &str = "${";
pub const SUFFIX: &str = "}";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unclosed expression starting at {offset}, expected '}}'")]
    Unclosed { offset: usize },
}

impl TemplateError {
    pub fn message_key(&self) -> &'static str {
        match self {
            TemplateError::Unclosed { .. } => "el.template.unclosedExpression",
        }
    }

    pub fn message_args(&self) -> Vec<String> {
        match self {
            TemplateError::Unclosed { offset } => vec![offset.to_string()],
        }
    }
}

/// Strip one surrounding `${ }` from `s`. Text without the prefix is
/// returned as is.
pub fn remove_prefix_and_suffix(s: &str) -> Result<&str, TemplateError> {
    match s.strip_prefix(PREFIX) {
        Some(inner) => inner
            .strip_suffix(SUFFIX)
            .ok_or(TemplateError::Unclosed { offset: 0 }),
        None => Ok(s),
    }
}

/// Whether `s`, ignoring surrounding whitespace, is wrapped in `${ }`.
pub fn has_prefix_and_suffix(s: &str) -> bool {
    let s = s.trim();
    s.starts_with(PREFIX) && s.ends_with(SUFFIX)
}

/// Template text before compilation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Text(String),
    Expr(&'a str),
}

/// Split `text` into literal runs and expression bodies.
pub(crate) fn split(text: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;
    let mut offset = 0;

    while let Some(start) = rest.find(PREFIX) {
        let before = &rest[..start];
        let after_prefix = start + PREFIX.len();
        if let Some(escaped) = before.strip_suffix('\\') {
            literal.push_str(escaped);
            literal.push_str(PREFIX);
            rest = &rest[after_prefix..];
            offset += after_prefix;
            continue;
        }
        let Some(len) = rest[after_prefix..].find(SUFFIX) else {
            return Err(TemplateError::Unclosed {
                offset: offset + start,
            });
        };
        literal.push_str(before);
        if !literal.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Expr(&rest[after_prefix..after_prefix + len]));
        let next = after_prefix + len + SUFFIX.len();
        rest = &rest[next..];
        offset += next;
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    Ok(segments)
}

#[derive(Debug)]
pub enum Part {
    Text(String),
    Expr(CompiledExpression),
}

/// A parsed template.
#[derive(Debug)]
pub struct CompositeExpression {
    source: String,
    parts: Vec<Part>,
}

impl CompositeExpression {
    /// Parse `text`, compiling every block with `compile`.
    pub fn parse_with<F>(text: &str, mut compile: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<CompiledExpression>,
    {
        let parts = split(text)?
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => Ok(Part::Text(text)),
                Segment::Expr(body) => compile(body).map(Part::Expr),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(CompositeExpression {
            source: text.to_owned(),
            parts,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// True when the template has no `${}` blocks.
    pub fn is_literal(&self) -> bool {
        self.parts.iter().all(|part| matches!(part, Part::Text(_)))
    }

    pub fn evaluate(&self, ctx: &dyn EvalContext) -> EvalResult {
        match self.parts.as_slice() {
            [] => Ok(Value::string("")),
            [Part::Expr(expr)] => expr.evaluate(ctx),
            [Part::Text(text)] => Ok(Value::string(text.as_str())),
            parts => {
                let mut out = String::with_capacity(self.source.len());
                for part in parts {
                    match part {
                        Part::Text(text) => out.push_str(text),
                        Part::Expr(expr) => {
                            let value = expr.evaluate(ctx)?;
                            if !value.is_null() {
                                out.push_str(&to_string(ctx, &value));
                            }
                        }
                    }
                }
                Ok(Value::string(out))
            }
        }
    }
}

impl fmt::Display for CompositeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Either a fixed value or an expression, depending on whether the text was
/// wrapped in `${ }`.
#[derive(Debug)]
pub enum ValueExpression {
    Constant(Value),
    Expr(CompiledExpression),
}

impl ValueExpression {
    pub fn evaluate(&self, ctx: &dyn EvalContext) -> EvalResult {
        match self {
            ValueExpression::Constant(value) => Ok(value.clone()),
            ValueExpression::Expr(expr) => expr.evaluate(ctx),
        }
    }
}
