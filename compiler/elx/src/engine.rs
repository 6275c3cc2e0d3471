//! Embedding entry point.
//!
//! An [`ExpressionLanguage`] bundles what a host configures once (known
//! types, imports, parse-time constants, functions, the type binder) and
//! hands out compiled expressions and evaluation contexts that share it.

use std::sync::Arc;

use el_eval::coerce::{self, default_convert, ConvertTarget};
use el_eval::{Callable, DefaultEvalContext, FunctionRegistry, HostError, TypeBinder, Value};
use el_ir::Literal;
use el_parse::DefaultParseContext;

use crate::error::Result;
use crate::template::{
    has_prefix_and_suffix, remove_prefix_and_suffix, CompositeExpression, ValueExpression,
};
use crate::{parse_with, CompiledExpression};

/// Configured expression engine.
///
/// Cheap to share: functions and the binder sit behind `Arc`s, and every
/// context from [`context`](Self::context) points at the same ones.
#[derive(Clone, Debug)]
pub struct ExpressionLanguage {
    parse_context: DefaultParseContext,
    functions: Arc<FunctionRegistry>,
    binder: Arc<TypeBinder>,
}

impl Default for ExpressionLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionLanguage {
    /// Engine with the built-in types and methods and no functions.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ExpressionLanguageBuilder {
        ExpressionLanguageBuilder::default()
    }

    pub fn parse_context(&self) -> &DefaultParseContext {
        &self.parse_context
    }

    /// Function table. Registering here is visible to contexts already
    /// handed out.
    pub fn functions(&self) -> &Arc<FunctionRegistry> {
        &self.functions
    }

    pub fn binder(&self) -> &Arc<TypeBinder> {
        &self.binder
    }

    /// Compile a single expression. A surrounding `${ }` is stripped.
    pub fn create_expression(&self, text: &str) -> Result<CompiledExpression> {
        let body = remove_prefix_and_suffix(text)?;
        parse_with(body, &self.parse_context)
    }

    /// Compile a template mixing literal text and `${}` blocks.
    pub fn create_composite_expression(&self, text: &str) -> Result<CompositeExpression> {
        CompositeExpression::parse_with(text, |body| parse_with(body, &self.parse_context))
    }

    /// `${expr}` (ignoring surrounding whitespace) compiles to an expression;
    /// anything else is taken as a string constant.
    pub fn create_value_expression(&self, text: &str) -> Result<ValueExpression> {
        if has_prefix_and_suffix(text) {
            self.create_expression(text.trim()).map(ValueExpression::Expr)
        } else {
            Ok(ValueExpression::Constant(Value::string(text)))
        }
    }

    /// Like [`create_value_expression`](Self::create_value_expression), but
    /// a constant is converted to `target` up front.
    pub fn create_typed_value_expression(
        &self,
        text: &str,
        target: ConvertTarget,
    ) -> Result<ValueExpression> {
        if has_prefix_and_suffix(text) {
            return self.create_expression(text.trim()).map(ValueExpression::Expr);
        }
        let value = default_convert(&Value::string(text), target)?;
        Ok(ValueExpression::Constant(value))
    }

    /// `None` for blank text, otherwise as
    /// [`create_value_expression`](Self::create_value_expression).
    pub fn try_create_value_expression(&self, text: &str) -> Result<Option<ValueExpression>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        self.create_value_expression(text).map(Some)
    }

    pub fn try_create_typed_value_expression(
        &self,
        text: &str,
        target: ConvertTarget,
    ) -> Result<Option<ValueExpression>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        self.create_typed_value_expression(text, target).map(Some)
    }

    /// Fresh context over `root`, sharing this engine's functions and binder.
    pub fn context(&self, root: impl Into<Value>) -> DefaultEvalContext {
        DefaultEvalContext::new()
            .with_root(root)
            .with_functions(Arc::clone(&self.functions))
            .with_binder(Arc::clone(&self.binder))
    }

    /// Compile and evaluate `text` once.
    pub fn eval<K, I>(&self, text: &str, root: impl Into<Value>, variables: I) -> Result<Value>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let expr = self.create_expression(text)?;
        Ok(expr.evaluate(&self.bound_context(root, variables))?)
    }

    /// Evaluate `expr` and report whether the result is truthy: not null,
    /// not `false`, not a zero number and not an empty string or collection.
    pub fn test<K, I>(
        &self,
        expr: &CompiledExpression,
        root: impl Into<Value>,
        variables: I,
    ) -> Result<bool>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let value = expr.evaluate(&self.bound_context(root, variables))?;
        Ok(coerce::test(&value))
    }

    /// Compile `text`, then [`test`](Self::test) it.
    pub fn test_str<K, I>(&self, text: &str, root: impl Into<Value>, variables: I) -> Result<bool>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        self.test(&self.create_expression(text)?, root, variables)
    }

    fn bound_context<K, I>(&self, root: impl Into<Value>, variables: I) -> DefaultEvalContext
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut ctx = self.context(root);
        for (name, value) in variables {
            ctx.set_variable(name, value);
        }
        ctx
    }
}

/// Builder for [`ExpressionLanguage`].
#[derive(Debug)]
pub struct ExpressionLanguageBuilder {
    parse_context: DefaultParseContext,
    functions: FunctionRegistry,
    binder: TypeBinder,
}

impl Default for ExpressionLanguageBuilder {
    fn default() -> Self {
        ExpressionLanguageBuilder {
            parse_context: DefaultParseContext::new(),
            functions: FunctionRegistry::new(),
            binder: TypeBinder::with_builtins(),
        }
    }
}

impl ExpressionLanguageBuilder {
    /// Make `T(qualified)` resolvable once imported or defaulted.
    #[must_use]
    pub fn register_type(mut self, qualified: impl Into<String>) -> Self {
        self.parse_context.register_type(qualified);
        self
    }

    /// Import a package (`com.acme`) or a single type (`com.acme.Widget`).
    #[must_use]
    pub fn import(mut self, package_or_type: impl Into<String>) -> Self {
        self.parse_context.import(package_or_type);
        self
    }

    #[must_use]
    pub fn default_package(mut self, package: impl Into<String>) -> Self {
        self.parse_context.add_default_package(package);
        self
    }

    /// Identifier replaced by `value` at parse time.
    #[must_use]
    pub fn constant(mut self, name: impl Into<String>, value: Literal) -> Self {
        self.parse_context.set_constant(name, value);
        self
    }

    #[must_use]
    pub fn function(self, full_name: impl Into<String>, callable: Callable) -> Self {
        self.functions.register(full_name, callable);
        self
    }

    #[must_use]
    pub fn function_fn<F>(self, full_name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, HostError> + Send + Sync + 'static,
    {
        self.functions.register_fn(full_name, f);
        self
    }

    /// Replace the binder. Starts from the built-in one.
    #[must_use]
    pub fn binder(mut self, binder: TypeBinder) -> Self {
        self.binder = binder;
        self
    }

    /// Add getters or methods to the current binder.
    #[must_use]
    pub fn configure_binder(mut self, configure: impl FnOnce(&mut TypeBinder)) -> Self {
        configure(&mut self.binder);
        self
    }

    pub fn build(self) -> ExpressionLanguage {
        tracing::debug!(
            functions = self.functions.len(),
            "expression language configured"
        );
        ExpressionLanguage {
            parse_context: self.parse_context,
            functions: Arc::new(self.functions),
            binder: Arc::new(self.binder),
        }
    }
}
