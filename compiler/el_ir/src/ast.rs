//! Flat expression tree.
//!
//! Nodes live in an [`ExprArena`] and refer to each other through
//! [`ExprId`] indices. Argument lists are [`ExprRange`] slices into a
//! second flattened vector. The arena is built once by the parser and is
//! read-only afterwards.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

use super::{BinaryOp, Name, Span, UnaryOp};

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Range of expressions in the flattened list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u32,
}

impl ExprRange {
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ExprRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Handle of a late-bound call site (`Method` or `Function` node).
///
/// The evaluator keeps one resolution slot per call site, indexed by this
/// handle, next to the arena rather than inside it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct CallSiteId(u32);

impl CallSiteId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        CallSiteId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Literal value as decoded by the lexer and folded by the parser.
///
/// Numbers keep the width they were decoded with.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    BigInt(Box<BigInt>),
    Float(f32),
    Double(f64),
    Str(Arc<str>),
}

impl Literal {
    /// Whether this is a numeric literal below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Literal::Int(v) => *v < 0,
            Literal::Long(v) => *v < 0,
            Literal::BigInt(v) => v.sign() == num_bigint::Sign::Minus,
            Literal::Float(v) => v.is_sign_negative(),
            Literal::Double(v) => v.is_sign_negative(),
            Literal::Null | Literal::Bool(_) | Literal::Str(_) => false,
        }
    }
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Variable reference, with the value a parse-time constant had, if any.
    Ident {
        name: Name,
        snapshot: Option<Literal>,
    },

    Literal(Literal),

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },

    /// `cond ? yes : no`
    Choice {
        cond: ExprId,
        yes: ExprId,
        no: ExprId,
    },

    /// `target[index]`
    Item {
        target: ExprId,
        index: ExprId,
    },

    /// `owner.name`
    Property {
        owner: ExprId,
        name: Name,
    },

    /// `owner.name(args)`
    Method {
        owner: ExprId,
        name: Name,
        args: ExprRange,
        site: CallSiteId,
    },

    /// `name(args)` or `prefix:name(args)`
    Function {
        prefix: Option<Name>,
        name: Name,
        args: ExprRange,
        site: CallSiteId,
    },

    /// `T(qualified.Name)`, already resolved to a qualified type name.
    TypeRef {
        name: Name,
    },
}

/// Storage for every node of one parsed expression.
#[derive(Clone, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    call_sites: u32,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression and return its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Allocate a list of expression IDs and return its range.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len());
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Reserve a fresh call site.
    pub fn alloc_call_site(&mut self) -> CallSiteId {
        let id = CallSiteId::new(self.call_sites);
        self.call_sites += 1;
        id
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of call sites handed out by [`alloc_call_site`](Self::alloc_call_site).
    pub fn call_site_count(&self) -> usize {
        self.call_sites as usize
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("expr_lists", &self.expr_lists.len())
            .field("call_sites", &self.call_sites)
            .finish()
    }
}

// Source text is capped at u32::MAX bytes, and every node consumes at least
// one byte, so arena indices fit.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);
}
