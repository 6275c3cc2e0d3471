//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category; `EvalError` adds where it
//! happened (span and the printed sub-expression) and the host error that
//! caused it, if any.
//!
//! Construct errors through the `#[cold]` functions at the bottom of this
//! module rather than building kinds inline, so message keys stay in one
//! place.

use std::fmt;

use el_ir::Span;

/// Error type host callables return.
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of evaluation.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Resolution
    #[error("no such function '{name}'")]
    NoSuchFunction { name: String },
    #[error("cannot resolve method '{name}' on {type_name}")]
    UnresolvedMethod { name: String, type_name: String },
    #[error("cannot call method '{name}' on null")]
    NullMethodOwner { name: String },
    #[error("no property '{name}' on {type_name}")]
    NoSuchProperty { name: String, type_name: String },
    #[error("call to '{name}' failed: {message}")]
    InvocationFailed { name: String, message: String },

    // Indexing
    #[error("cannot index into null")]
    NullArrayTarget,
    #[error("index must be an integer, found {type_name}")]
    NonIntegerIndex { type_name: String },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("{type_name} cannot be indexed")]
    NotIndexable { type_name: String },

    // Operators
    #[error("operator '{op}' cannot be applied to {left} and {right}")]
    CannotApplyOperator {
        op: &'static str,
        left: String,
        right: String,
    },
    #[error("unary '-' cannot be applied to {type_name}")]
    CannotApplyMinus { type_name: String },
    #[error("unary '+' cannot be applied to {type_name}")]
    CannotApplyPlus { type_name: String },
    #[error("'~' cannot be applied to {type_name}")]
    CannotApplyBitNot { type_name: String },
    #[error("{left} and {right} are not comparable")]
    ValuesNotComparable { left: String, right: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("right side of instanceof must be a type, found {type_name}")]
    NotAType { type_name: String },

    // Conversion
    #[error("cannot convert '{value}' to {target}")]
    ConversionFailed { value: String, target: &'static str },
}

impl EvalErrorKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NoSuchFunction { .. } => "el.eval.noSuchFunction",
            Self::UnresolvedMethod { .. } => "el.eval.unresolvedMethod",
            Self::NullMethodOwner { .. } => "el.eval.nullMethodOwner",
            Self::NoSuchProperty { .. } => "el.eval.noSuchProperty",
            Self::InvocationFailed { .. } => "el.eval.invocationFailed",
            Self::NullArrayTarget => "el.eval.nullArrayTarget",
            Self::NonIntegerIndex { .. } => "el.eval.nonIntegerIndex",
            Self::IndexOutOfBounds { .. } => "el.eval.indexOutOfBounds",
            Self::NotIndexable { .. } => "el.eval.notIndexable",
            Self::CannotApplyOperator { .. } => "el.eval.cannotApplyOperator",
            Self::CannotApplyMinus { .. } => "el.eval.cannotApplyMinusOperatorTo",
            Self::CannotApplyPlus { .. } => "el.eval.cannotApplyPlusOperatorTo",
            Self::CannotApplyBitNot { .. } => "el.eval.cannotApplyBitNotOperatorTo",
            Self::ValuesNotComparable { .. } => "el.eval.valuesNotComparable",
            Self::DivisionByZero => "el.eval.divisionByZero",
            Self::NotAType { .. } => "el.eval.notAType",
            Self::ConversionFailed { .. } => "el.eval.conversionFailed",
        }
    }

    pub fn message_args(&self) -> Vec<String> {
        match self {
            Self::NoSuchFunction { name }
            | Self::NullMethodOwner { name } => vec![name.clone()],
            Self::UnresolvedMethod { name, type_name } | Self::NoSuchProperty { name, type_name } => {
                vec![name.clone(), type_name.clone()]
            }
            Self::InvocationFailed { name, message } => vec![name.clone(), message.clone()],
            Self::NullArrayTarget | Self::DivisionByZero => Vec::new(),
            Self::NonIntegerIndex { type_name }
            | Self::NotIndexable { type_name }
            | Self::CannotApplyMinus { type_name }
            | Self::CannotApplyPlus { type_name }
            | Self::CannotApplyBitNot { type_name }
            | Self::NotAType { type_name } => vec![type_name.clone()],
            Self::IndexOutOfBounds { index, len } => vec![index.to_string(), len.to_string()],
            Self::CannotApplyOperator { op, left, right } => {
                vec![(*op).to_owned(), left.clone(), right.clone()]
            }
            Self::ValuesNotComparable { left, right } => vec![left.clone(), right.clone()],
            Self::ConversionFailed { value, target } => vec![value.clone(), (*target).to_owned()],
        }
    }
}

/// Evaluation error.
#[derive(Debug, thiserror::Error)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the innermost node that failed.
    pub span: Option<Span>,
    /// Printed text of that node.
    pub expr: Option<String>,
    #[source]
    pub source: Option<HostError>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            expr: None,
            source: None,
        }
    }

    /// Attach a location unless one is already set.
    #[must_use]
    pub fn located(mut self, span: Span, expr: impl FnOnce() -> String) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
            self.expr = Some(expr());
        }
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: HostError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn message_key(&self) -> &'static str {
        self.kind.message_key()
    }

    /// Kind-specific arguments, followed by the failing expression if known.
    pub fn message_args(&self) -> Vec<String> {
        let mut args = self.kind.message_args();
        if let Some(expr) = &self.expr {
            args.push(expr.clone());
        }
        args
    }

    /// Message rendered through the host's message source.
    pub fn localized(&self, ctx: &dyn crate::EvalContext) -> String {
        ctx.get_message(self.message_key(), &self.message_args())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match (&self.expr, self.span) {
            (Some(expr), Some(span)) => write!(f, " in '{expr}' (at {span})"),
            (None, Some(span)) => write!(f, " (at {span})"),
            _ => Ok(()),
        }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Resolution Errors

#[cold]
pub fn no_such_function(name: &str) -> EvalError {
    EvalErrorKind::NoSuchFunction {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn unresolved_method(name: &str, type_name: &str) -> EvalError {
    EvalErrorKind::UnresolvedMethod {
        name: name.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn null_method_owner(name: &str) -> EvalError {
    EvalErrorKind::NullMethodOwner {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn no_such_property(name: &str, type_name: &str) -> EvalError {
    EvalErrorKind::NoSuchProperty {
        name: name.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn invocation_failed(name: &str, cause: HostError) -> EvalError {
    EvalError::new(EvalErrorKind::InvocationFailed {
        name: name.to_owned(),
        message: cause.to_string(),
    })
    .with_source(cause)
}

// Indexing Errors

#[cold]
pub fn null_array_target() -> EvalError {
    EvalErrorKind::NullArrayTarget.into()
}

#[cold]
pub fn non_integer_index(type_name: &str) -> EvalError {
    EvalErrorKind::NonIntegerIndex {
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

#[cold]
pub fn not_indexable(type_name: &str) -> EvalError {
    EvalErrorKind::NotIndexable {
        type_name: type_name.to_owned(),
    }
    .into()
}

// Operator Errors

#[cold]
pub fn cannot_apply_operator(op: &'static str, left: &str, right: &str) -> EvalError {
    EvalErrorKind::CannotApplyOperator {
        op,
        left: left.to_owned(),
        right: right.to_owned(),
    }
    .into()
}

#[cold]
pub fn cannot_apply_minus(type_name: &str) -> EvalError {
    EvalErrorKind::CannotApplyMinus {
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn cannot_apply_plus(type_name: &str) -> EvalError {
    EvalErrorKind::CannotApplyPlus {
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn cannot_apply_bit_not(type_name: &str) -> EvalError {
    EvalErrorKind::CannotApplyBitNot {
        type_name: type_name.to_owned(),
    }
    .into()
}

#[cold]
pub fn values_not_comparable(left: &str, right: &str) -> EvalError {
    EvalErrorKind::ValuesNotComparable {
        left: left.to_owned(),
        right: right.to_owned(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn not_a_type(type_name: &str) -> EvalError {
    EvalErrorKind::NotAType {
        type_name: type_name.to_owned(),
    }
    .into()
}

// Conversion Errors

#[cold]
pub fn conversion_failed(value: &str, target: &'static str) -> EvalError {
    EvalErrorKind::ConversionFailed {
        value: value.to_owned(),
        target,
    }
    .into()
}
