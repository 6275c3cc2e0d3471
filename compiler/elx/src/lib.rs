//! ELX - embedding facade for the EL expression engine.
//!
//! ```text
//! text ──lex──> tokens ──parse──> arena + root ──compile──> CompiledExpression
//!                                                              │
//!                                        evaluate(ctx) ────────┘
//! ```
//!
//! - [`parse`] / [`parse_with`]: text to a [`CompiledExpression`]
//! - [`evaluate`], [`print`]: run or pretty-print one
//! - [`ExpressionLanguage`]: a configured engine (types, imports, constants,
//!   functions, binder) handing out expressions, templates and contexts
//! - [`template`]: `"Hello ${name}"` composite expressions
//! - [`commands`]: the `elx` command line
//!
//! Tracing is opt-in: call [`init_tracing`] and set `RUST_LOG`.

pub mod commands;
mod engine;
mod error;
pub mod template;

use std::sync::Once;

use el_parse::ParseContext;

pub use el_eval::coerce::ConvertTarget;
pub use el_eval::{
    function, method, CompiledExpression, DefaultEvalContext, EmptyContext, EvalContext,
    EvalError, EvalErrorKind, FunctionRegistry, HostObject, TypeBinder, Value,
};
pub use el_ir::Literal;
pub use el_lexer::{tokenize, LexError};
pub use el_parse::{DefaultParseContext, ParseError};
pub use engine::{ExpressionLanguage, ExpressionLanguageBuilder};
pub use error::{Error, Result};
pub use template::{CompositeExpression, TemplateError, ValueExpression};

/// Parse `text` with the default parse context (builtin types only).
pub fn parse(text: &str) -> Result<CompiledExpression> {
    parse_with(text, &DefaultParseContext::new())
}

/// Parse `text`, resolving types and constants through `context`.
pub fn parse_with(text: &str, context: &dyn ParseContext) -> Result<CompiledExpression> {
    let parsed = el_parse::parse_with(text, context)?;
    Ok(CompiledExpression::new(
        text,
        parsed.arena,
        parsed.root,
        parsed.symbols,
    ))
}

pub fn evaluate(expr: &CompiledExpression, ctx: &dyn EvalContext) -> Result<Value> {
    Ok(expr.evaluate(ctx)?)
}

/// Canonical source form. Parsing it back yields an equivalent expression.
pub fn print(expr: &CompiledExpression) -> String {
    expr.print()
}

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// `ELX_LOG_TREE=1` switches to indented span trees. Safe to call more than
/// once; does nothing if the host already installed a subscriber.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        let installed = if std::env::var_os("ELX_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
