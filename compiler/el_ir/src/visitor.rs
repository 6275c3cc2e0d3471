//! Expression visitor.
//!
//! Traversal is pre/post: [`Visitor::start_visit`] runs before a node's
//! children and decides whether to descend, [`Visitor::end_visit`] runs after
//! them. Children are visited in source order:
//!
//! - `Binary`: left, right
//! - `Choice`: condition, yes, no
//! - `Item`: target, index
//! - `Property`: owner
//! - `Method`: owner, then arguments
//! - `Function`: arguments
//!
//! A visitor that wants full control (the printer, for one) returns `false`
//! from `start_visit` and walks the children it cares about itself.

use super::ast::{Expr, ExprKind};
use super::{ExprArena, ExprId};

pub trait Visitor<'ast> {
    /// Called before the children of `expr`. Returning `false` skips them.
    fn start_visit(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) -> bool {
        let _ = (id, expr, arena);
        true
    }

    /// Called after the children of `expr` (or right after `start_visit` if
    /// the children were skipped).
    fn end_visit(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) {
        let _ = (id, expr, arena);
    }
}

/// Visit `id` and, unless the visitor declines, all of its descendants.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast ExprArena,
) {
    el_stack::ensure_sufficient_stack(|| {
        let expr = arena.get_expr(id);
        if visitor.start_visit(id, expr, arena) {
            walk_children(visitor, expr, arena);
        }
        visitor.end_visit(id, expr, arena);
    });
}

/// Visit the children of `expr` without calling the hooks for `expr` itself.
pub fn walk_children<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        ExprKind::Ident { .. } | ExprKind::Literal(_) | ExprKind::TypeRef { .. } => {}
        ExprKind::Binary { left, right, .. } => {
            walk_expr(visitor, *left, arena);
            walk_expr(visitor, *right, arena);
        }
        ExprKind::Unary { operand, .. } => walk_expr(visitor, *operand, arena),
        ExprKind::Choice { cond, yes, no } => {
            walk_expr(visitor, *cond, arena);
            walk_expr(visitor, *yes, arena);
            walk_expr(visitor, *no, arena);
        }
        ExprKind::Item { target, index } => {
            walk_expr(visitor, *target, arena);
            walk_expr(visitor, *index, arena);
        }
        ExprKind::Property { owner, .. } => walk_expr(visitor, *owner, arena),
        ExprKind::Method { owner, args, .. } => {
            walk_expr(visitor, *owner, arena);
            for &arg in arena.get_expr_list(*args) {
                walk_expr(visitor, arg, arena);
            }
        }
        ExprKind::Function { args, .. } => {
            for &arg in arena.get_expr_list(*args) {
                walk_expr(visitor, arg, arena);
            }
        }
    }
}
