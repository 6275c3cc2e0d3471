//! Expression grammar.
//!
//! - `expr.rs`: entry point (`parse_expr`), ternary, the binary chain, unary
//! - `operators.rs`: token to operator mapping per precedence level
//! - `primary.rs`: literals, identifiers, calls, `T(Name)`, postfix chains

mod expr;
mod operators;
mod primary;

#[cfg(test)]
pub(crate) use expr::negate;
