//! EL Printer
//!
//! Turns a parsed expression back into source text. The output re-parses to
//! a tree that evaluates the same way as the original; it is not a
//! byte-for-byte reproduction (whitespace is normalized, redundant
//! parentheses are dropped, strings are single-quoted).
//!
//! # Modules
//!
//! - [`emitter`]: output sinks (`String`, any `fmt::Write`)
//! - [`printer`]: the printing visitor and literal rendering
//!
//! # Example
//!
//! ```
//! let parsed = el_parse::parse("(a+b) * -(c)").unwrap();
//! let text = el_fmt::print_expr(&parsed.arena, &parsed.symbols, parsed.root);
//! assert_eq!(text, "(a + b) * -c");
//! ```

pub mod emitter;
pub mod printer;

use el_ir::{ExprArena, ExprId, SymbolTable};

pub use emitter::{Emitter, FmtEmitter, StringEmitter};
pub use printer::Printer;

/// Print the expression rooted at `root` to a new string.
pub fn print_expr(arena: &ExprArena, symbols: &SymbolTable, root: ExprId) -> String {
    Printer::new(symbols, StringEmitter::with_capacity(arena.len() * 4))
        .print(arena, root)
        .output()
}

/// Print the expression rooted at `root` into a formatter.
pub fn write_expr(
    out: &mut (impl std::fmt::Write + ?Sized),
    arena: &ExprArena,
    symbols: &SymbolTable,
    root: ExprId,
) -> std::fmt::Result {
    Printer::new(symbols, FmtEmitter::new(out))
        .print(arena, root)
        .finish()
}
