//! Tree-walking interpreter.
//!
//! One [`Interpreter`] evaluates one [`CompiledExpression`] against one
//! context. It holds no state of its own: everything mutable lives in the
//! expression's call-site caches, which are safe to share. The context's
//! resolution scope is read once per evaluation.
//!
//! # Error locations
//!
//! Every node wraps its failure with its span and printed text. Only the
//! first (innermost) location sticks, so an error inside `a.b(c.d)` names
//! `c.d`, not the whole call.
//!
//! # Modules
//!
//! - `function_call`: `f(...)`, `p:f(...)` and the root-method fallback
//! - `method_dispatch`: `owner.m(...)`

mod function_call;
mod method_dispatch;

use el_ir::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Literal, Name, UnaryOp};
use el_stack::ensure_sufficient_stack;
use num_traits::ToPrimitive;

use crate::call_site::ResolutionScope;
use crate::coerce::test;
use crate::compiled::CompiledExpression;
use crate::context::{EvalContext, Resolved};
use crate::errors::{no_such_property, non_integer_index, null_array_target, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

pub(crate) struct Interpreter<'a> {
    expr: &'a CompiledExpression,
    ctx: &'a dyn EvalContext,
    scope: Option<ResolutionScope>,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(expr: &'a CompiledExpression, ctx: &'a dyn EvalContext) -> Self {
        Interpreter {
            expr,
            ctx,
            scope: ctx.resolution_scope(),
        }
    }

    #[inline]
    fn arena(&self) -> &'a ExprArena {
        self.expr.arena()
    }

    #[inline]
    fn name(&self, name: Name) -> &'a str {
        self.expr.symbols().lookup(name)
    }

    /// Evaluate one node, attaching its location to any error.
    pub(crate) fn eval(&self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let expr = self.arena().get_expr(id);
            self.eval_expr(expr).map_err(|e| {
                e.located(expr.span, || {
                    el_fmt::print_expr(self.arena(), self.expr.symbols(), id)
                })
            })
        })
    }

    fn eval_expr(&self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Ident { name, snapshot } => Ok(self.ident(*name, snapshot.as_ref())),
            ExprKind::Literal(value) => Ok(Value::from_literal(value)),
            ExprKind::Binary { op, left, right } => self.binary(*op, *left, *right),
            ExprKind::Unary { op, operand } => self.unary(*op, *operand),
            ExprKind::Choice { cond, yes, no } => {
                if test(&self.eval(*cond)?) {
                    self.eval(*yes)
                } else {
                    self.eval(*no)
                }
            }
            ExprKind::Item { target, index } => self.item(*target, *index),
            ExprKind::Property { owner, name } => {
                let owner = self.eval(*owner)?;
                if owner.is_null() {
                    return Ok(Value::Null);
                }
                self.property(&owner, self.name(*name))
            }
            ExprKind::Method {
                owner,
                name,
                args,
                site,
            } => self.method_call(*owner, *name, *args, *site),
            ExprKind::Function {
                prefix,
                name,
                args,
                site,
            } => self.function_call(*prefix, *name, *args, *site),
            ExprKind::TypeRef { name } => Ok(Value::type_ref(self.name(*name))),
        }
    }

    /// Context value, else the parse-time snapshot, else null.
    fn ident(&self, name: Name, snapshot: Option<&Literal>) -> Value {
        match self.ctx.resolve_variable(self.name(name)) {
            Resolved::Value(value) => value,
            Resolved::Null => Value::Null,
            Resolved::Absent => snapshot.map_or(Value::Null, Value::from_literal),
        }
    }

    fn binary(&self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let left = self.eval(left)?;
        match op {
            BinaryOp::And if !test(&left) => Ok(Value::Bool(false)),
            BinaryOp::Or if test(&left) => Ok(Value::Bool(true)),
            BinaryOp::And | BinaryOp::Or => Ok(Value::Bool(test(&self.eval(right)?))),
            _ => {
                let right = self.eval(right)?;
                evaluate_binary(self.ctx, op, &left, &right)
            }
        }
    }

    fn unary(&self, op: UnaryOp, operand: ExprId) -> EvalResult {
        let value = self.eval(operand)?;
        evaluate_unary(self.ctx, op, &value)
    }

    fn property(&self, owner: &Value, name: &str) -> EvalResult {
        self.ctx
            .property(owner, name)?
            .ok_or_else(|| no_such_property(name, owner.type_name()))
    }

    /// `target[index]`: string keys are property lookups, integers go
    /// through the context's array access.
    fn item(&self, target: ExprId, index: ExprId) -> EvalResult {
        let target = self.eval(target)?;
        let index = self.eval(index)?;
        let position = match &index {
            Value::Str(_) if target.is_null() => return Ok(Value::Null),
            Value::Str(key) => return self.property(&target, key),
            Value::Byte(v) => i64::from(*v),
            Value::Short(v) => i64::from(*v),
            Value::Int(v) => i64::from(*v),
            Value::Long(v) => *v,
            Value::BigInt(v) => v
                .to_i64()
                .ok_or_else(|| non_integer_index(index.type_name()))?,
            other => return Err(non_integer_index(other.type_name())),
        };
        if target.is_null() {
            return Err(null_array_target());
        }
        self.ctx.get_array_item(&target, position)
    }
}
