//! EL IR - shared data structures for the expression engine.
//!
//! This crate holds everything the lexer, parser, printer and evaluator agree on:
//! - Spans for source locations
//! - `Name` handles and the per-parse `SymbolTable`
//! - `TokenKind` and `Token`
//! - Binary and unary operators with their precedence
//! - The expression arena (`ExprArena`, `ExprId`, `ExprKind`)
//! - The `Visitor` traversal protocol
//!
//! # Design
//!
//! - **Intern identifiers**: identifier text becomes a `Name(u32)` scoped to
//!   the `SymbolTable` of one parse. There is no process-wide table.
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!   into a contiguous arena.
//! - **Late binding lives outside the tree**: `Method` and `Function` nodes
//!   carry a `CallSiteId` that the evaluator maps to a memo slot, so the arena
//!   itself stays plain immutable data.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod name;
mod operators;
mod span;
mod symbol_table;
mod token;
pub mod visitor;

pub use ast::{CallSiteId, Expr, ExprArena, ExprId, ExprKind, ExprRange, Literal};
pub use name::Name;
pub use operators::{BinaryOp, UnaryOp, TERNARY_PRECEDENCE};
pub use span::{Span, SpanError};
pub use symbol_table::SymbolTable;
pub use token::{Token, TokenKind};
pub use visitor::{walk_expr, Visitor};
