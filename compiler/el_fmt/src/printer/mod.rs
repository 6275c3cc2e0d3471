//! Printing visitor.
//!
//! Emits source text that re-parses to an equivalent tree. Parentheses are
//! only added where the tree shape would otherwise be lost:
//!
//! - a binary operand whose operator binds looser than its parent's, or
//!   equally loose on the right (every level is left associative)
//! - an operator, ternary or negative literal used as a postfix owner
//! - the operand of `-`/`+` when it begins with a number literal
//! - a ternary used as a ternary condition
//! - a prefixed call `p:f()` inside a ternary "yes" branch, where the parser
//!   would otherwise take its colon for the ternary's
//!
//! # Modules
//!
//! - [`literals`]: literal value rendering

mod literals;

use el_ir::visitor::walk_expr;
use el_ir::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprRange, Literal, SymbolTable, UnaryOp,
    Visitor, TERNARY_PRECEDENCE,
};

use crate::emitter::Emitter;

/// Precedence of unary operators and everything tighter (postfix, primary).
const UNARY_PRECEDENCE: u8 = 2;

/// Printer over one parsed expression.
pub struct Printer<'a, E: Emitter> {
    symbols: &'a SymbolTable,
    out: E,
    /// Enclosing ternary "yes" branches not separated by a delimiter.
    ques_depth: u32,
}

impl<'a, E: Emitter> Printer<'a, E> {
    pub fn new(symbols: &'a SymbolTable, out: E) -> Self {
        Printer {
            symbols,
            out,
            ques_depth: 0,
        }
    }

    /// Print `root` and hand back the emitter.
    pub fn print(mut self, arena: &ExprArena, root: ExprId) -> E {
        walk_expr(&mut self, root, arena);
        self.out
    }

    fn child(&mut self, id: ExprId, arena: &ExprArena) {
        walk_expr(self, id, arena);
    }

    fn parenthesized(&mut self, id: ExprId, arena: &ExprArena) {
        self.out.emit_char('(');
        self.delimited(|p| p.child(id, arena));
        self.out.emit_char(')');
    }

    fn child_parens_if(&mut self, parens: bool, id: ExprId, arena: &ExprArena) {
        if parens {
            self.parenthesized(id, arena);
        } else {
            self.child(id, arena);
        }
    }

    /// Run `f` outside any enclosing ternary branch; brackets and argument
    /// lists reset the parser's ternary depth too.
    fn delimited(&mut self, f: impl FnOnce(&mut Self)) {
        let saved = std::mem::replace(&mut self.ques_depth, 0);
        f(self);
        self.ques_depth = saved;
    }

    fn args(&mut self, args: ExprRange, arena: &ExprArena) {
        self.out.emit_char('(');
        self.delimited(|p| {
            for (i, &arg) in arena.get_expr_list(args).iter().enumerate() {
                if i > 0 {
                    p.out.emit(", ");
                }
                p.child(arg, arena);
            }
        });
        self.out.emit_char(')');
    }

    fn name(&mut self, name: el_ir::Name) {
        self.out.emit(self.symbols.lookup(name));
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, arena: &ExprArena) {
        let level = op.precedence();
        self.child_parens_if(precedence(arena.get_expr(left)) > level, left, arena);
        self.out.emit_char(' ');
        self.out.emit(op.as_symbol());
        self.out.emit_char(' ');
        self.child_parens_if(precedence(arena.get_expr(right)) >= level, right, arena);
    }

    fn unary(&mut self, op: UnaryOp, operand: ExprId, arena: &ExprArena) {
        self.out.emit(op.as_symbol());
        let inner = arena.get_expr(operand);
        // `-(5)` and `-(5).m()` must not print as `-5...`, which would fold
        // the sign into the literal.
        let signed = matches!(op, UnaryOp::Neg | UnaryOp::Plus)
            && (starts_with_sign(inner) || leads_with_number(inner, arena));
        self.child_parens_if(
            signed || precedence(inner) > UNARY_PRECEDENCE,
            operand,
            arena,
        );
    }

    fn choice(&mut self, cond: ExprId, yes: ExprId, no: ExprId, arena: &ExprArena) {
        let nested = matches!(arena.get_expr(cond).kind, ExprKind::Choice { .. });
        self.child_parens_if(nested, cond, arena);
        self.out.emit(" ? ");
        self.ques_depth += 1;
        self.child(yes, arena);
        self.ques_depth -= 1;
        self.out.emit(" : ");
        self.child(no, arena);
    }

    /// Owner of `.name`, `.name(...)` or `[...]`.
    fn owner(&mut self, owner: ExprId, arena: &ExprArena) {
        let expr = arena.get_expr(owner);
        let parens = precedence(expr) > UNARY_PRECEDENCE
            || matches!(expr.kind, ExprKind::Unary { .. })
            || starts_with_sign(expr);
        self.child_parens_if(parens, owner, arena);
    }

    fn function(
        &mut self,
        id: ExprId,
        prefix: Option<el_ir::Name>,
        name: el_ir::Name,
        args: ExprRange,
        arena: &ExprArena,
    ) {
        match prefix {
            Some(_) if self.ques_depth > 0 => self.parenthesized(id, arena),
            Some(prefix) => {
                self.name(prefix);
                self.out.emit_char(':');
                self.name(name);
                self.args(args, arena);
            }
            None => {
                self.name(name);
                self.args(args, arena);
            }
        }
    }
}

impl<'ast, E: Emitter> Visitor<'ast> for Printer<'_, E> {
    fn start_visit(&mut self, id: ExprId, expr: &'ast Expr, arena: &'ast ExprArena) -> bool {
        match &expr.kind {
            ExprKind::Ident { name, .. } => self.name(*name),
            ExprKind::Literal(value) => self.literal(value),
            ExprKind::Binary { op, left, right } => self.binary(*op, *left, *right, arena),
            ExprKind::Unary { op, operand } => self.unary(*op, *operand, arena),
            ExprKind::Choice { cond, yes, no } => self.choice(*cond, *yes, *no, arena),
            ExprKind::Item { target, index } => {
                self.owner(*target, arena);
                self.out.emit_char('[');
                self.delimited(|p| p.child(*index, arena));
                self.out.emit_char(']');
            }
            ExprKind::Property { owner, name } => {
                self.owner(*owner, arena);
                self.out.emit_char('.');
                self.name(*name);
            }
            ExprKind::Method {
                owner, name, args, ..
            } => {
                self.owner(*owner, arena);
                self.out.emit_char('.');
                self.name(*name);
                self.args(*args, arena);
            }
            ExprKind::Function {
                prefix, name, args, ..
            } => self.function(id, *prefix, *name, *args, arena),
            ExprKind::TypeRef { name } => {
                self.out.emit("T(");
                self.name(*name);
                self.out.emit_char(')');
            }
        }
        false
    }
}

/// How loosely `expr` binds, on the same scale as [`BinaryOp::precedence`].
fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::Choice { .. } => TERNARY_PRECEDENCE,
        _ => UNARY_PRECEDENCE,
    }
}

/// Whether `expr` is a number literal, or a postfix chain rooted at one.
fn leads_with_number(expr: &Expr, arena: &ExprArena) -> bool {
    match &expr.kind {
        ExprKind::Property { owner, .. }
        | ExprKind::Method { owner, .. }
        | ExprKind::Item { target: owner, .. } => {
            leads_with_number(arena.get_expr(*owner), arena)
        }
        _ => is_number(expr),
    }
}

fn is_number(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Literal(
            Literal::Int(_)
                | Literal::Long(_)
                | Literal::BigInt(_)
                | Literal::Float(_)
                | Literal::Double(_)
        )
    )
}

/// Whether printing `expr` starts with `-` or `+`.
fn starts_with_sign(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Unary { op, .. } => matches!(op, UnaryOp::Neg | UnaryOp::Plus),
        ExprKind::Literal(value) => value.is_negative(),
        _ => false,
    }
}
