//! Compiled expressions.
//!
//! A [`CompiledExpression`] owns everything one parse produced (arena, root,
//! symbols) plus one resolution cache per call site. It is immutable apart
//! from those caches, so a single instance can be evaluated from many
//! threads against independent contexts.

use std::fmt;

use el_ir::{CallSiteId, Expr, ExprArena, ExprId, ExprKind, SymbolTable, Visitor};
use rustc_hash::FxHashSet;

use crate::call_site::CallSiteCache;
use crate::context::EvalContext;
use crate::errors::EvalResult;
use crate::interpreter::Interpreter;

pub struct CompiledExpression {
    source: String,
    arena: ExprArena,
    root: ExprId,
    symbols: SymbolTable,
    call_sites: Box<[CallSiteCache]>,
}

impl CompiledExpression {
    pub fn new(
        source: impl Into<String>,
        arena: ExprArena,
        root: ExprId,
        symbols: SymbolTable,
    ) -> Self {
        let call_sites = (0..arena.call_site_count())
            .map(|_| CallSiteCache::new())
            .collect();
        CompiledExpression {
            source: source.into(),
            arena,
            root,
            symbols,
            call_sites,
        }
    }

    /// Text the expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    pub fn root(&self) -> ExprId {
        self.root
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) fn call_site(&self, id: CallSiteId) -> &CallSiteCache {
        &self.call_sites[id.index()]
    }

    /// Evaluate against `ctx`.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %self.source))]
    pub fn evaluate(&self, ctx: &dyn EvalContext) -> EvalResult {
        Interpreter::new(self, ctx).eval(self.root)
    }

    /// Canonical source text. Re-parsing it gives an expression that
    /// evaluates the same way.
    pub fn print(&self) -> String {
        el_fmt::print_expr(&self.arena, &self.symbols, self.root)
    }

    /// Distinct free variables, in order of first use.
    pub fn variables(&self) -> Vec<String> {
        let mut collector = VariableCollector {
            symbols: &self.symbols,
            seen: FxHashSet::default(),
            names: Vec::new(),
        };
        el_ir::walk_expr(&mut collector, self.root, &self.arena);
        collector.names
    }
}

struct VariableCollector<'a> {
    symbols: &'a SymbolTable,
    seen: FxHashSet<el_ir::Name>,
    names: Vec<String>,
}

impl<'ast> Visitor<'ast> for VariableCollector<'_> {
    fn start_visit(&mut self, _id: ExprId, expr: &'ast Expr, _arena: &'ast ExprArena) -> bool {
        if let ExprKind::Ident { name, .. } = expr.kind {
            if self.seen.insert(name) {
                self.names.push(self.symbols.lookup(name).to_owned());
            }
        }
        true
    }
}

impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        el_fmt::write_expr(f, &self.arena, &self.symbols, self.root)
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .field("nodes", &self.arena.len())
            .field("call_sites", &self.call_sites)
            .finish_non_exhaustive()
    }
}
