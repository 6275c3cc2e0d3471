//! `name(args)` and `prefix:name(args)`.
//!
//! Resolution order:
//! 1. a free function cached at this call site for the context's scope
//! 2. `resolve_function` on the context, by full name
//! 3. a method `name` on the context's root object, with the root as
//!    receiver (cached per scope and root type)

use std::borrow::Cow;

use el_ir::{CallSiteId, ExprRange, Name};

use super::method_dispatch::invoke;
use super::Interpreter;
use crate::call_site::Receiver;
use crate::errors::{no_such_function, EvalResult};
use crate::value::RuntimeType;

impl Interpreter<'_> {
    pub(super) fn function_call(
        &self,
        prefix: Option<Name>,
        name: Name,
        args: ExprRange,
        site: CallSiteId,
    ) -> EvalResult {
        let simple_name = self.name(name);
        let full_name: Cow<'_, str> = match prefix {
            Some(prefix) => Cow::Owned(format!("{}:{simple_name}", self.name(prefix))),
            None => Cow::Borrowed(simple_name),
        };
        let args = self.eval_args(args)?;

        if let Some(target) = self.cached(site, None) {
            return invoke(&target, &full_name, None, &args);
        }
        if let Some(target) = self.ctx.resolve_function(&full_name) {
            self.remember(site, Receiver::Free, &target);
            return invoke(&target, &full_name, None, &args);
        }

        let root = self.ctx.root();
        if root.is_null() {
            return Err(no_such_function(&full_name));
        }
        let target = match self.cached(site, Some(&root)) {
            Some(target) => target,
            None => {
                let Some(target) = self.ctx.resolve_method(&root, simple_name, &args) else {
                    return Err(no_such_function(&full_name));
                };
                tracing::debug!(
                    function = %full_name,
                    root = root.type_name(),
                    "no function registered, calling root method"
                );
                self.remember(site, Receiver::Typed(RuntimeType::of(&root)), &target);
                target
            }
        };
        invoke(&target, simple_name, Some(&root), &args)
    }
}
