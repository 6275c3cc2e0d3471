//! `owner.name(args)`.

use el_ir::{CallSiteId, ExprId, ExprRange, Name};
use smallvec::SmallVec;

use super::Interpreter;
use crate::call_site::Receiver;
use crate::errors::{invocation_failed, null_method_owner, unresolved_method, EvalResult};
use crate::host::Callable;
use crate::value::RuntimeType;
use crate::Value;

/// Evaluated arguments; most calls take only a few.
pub(super) type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    pub(super) fn eval_args(&self, args: ExprRange) -> EvalResult<Args> {
        self.arena()
            .get_expr_list(args)
            .iter()
            .map(|&arg| self.eval(arg))
            .collect()
    }

    pub(super) fn method_call(
        &self,
        owner: ExprId,
        name: Name,
        args: ExprRange,
        site: CallSiteId,
    ) -> EvalResult {
        let owner = self.eval(owner)?;
        let name = self.name(name);
        if owner.is_null() {
            return Err(null_method_owner(name));
        }
        let args = self.eval_args(args)?;
        let target = self.resolve_method(&owner, name, &args, site)?;
        invoke(&target, name, Some(&owner), &args)
    }

    /// Cached method for `owner`'s runtime type, resolving on a miss.
    fn resolve_method(
        &self,
        owner: &Value,
        name: &str,
        args: &[Value],
        site: CallSiteId,
    ) -> EvalResult<Callable> {
        if let Some(target) = self.cached(site, Some(owner)) {
            return Ok(target);
        }
        let target = self
            .ctx
            .resolve_method(owner, name, args)
            .ok_or_else(|| unresolved_method(name, owner.type_name()))?;
        self.remember(site, Receiver::Typed(RuntimeType::of(owner)), &target);
        Ok(target)
    }

    /// Callable cached at `site` for `receiver` under this evaluation's
    /// resolution scope.
    pub(super) fn cached(&self, site: CallSiteId, receiver: Option<&Value>) -> Option<Callable> {
        let scope = self.scope?;
        self.expr.call_site(site).get(scope, receiver)
    }

    pub(super) fn remember(&self, site: CallSiteId, receiver: Receiver, target: &Callable) {
        if let Some(scope) = self.scope {
            self.expr.call_site(site).publish(scope, receiver, target);
        }
    }
}

pub(super) fn invoke(
    target: &Callable,
    name: &str,
    receiver: Option<&Value>,
    args: &[Value],
) -> EvalResult {
    target
        .invoke(receiver, args)
        .map_err(|cause| invocation_failed(name, cause))
}
