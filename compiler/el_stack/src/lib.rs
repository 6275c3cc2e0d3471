//! Stack growth for deeply nested expressions.
//!
//! The parser, printer and evaluator all recurse over the expression tree.
//! A pathological input such as ten thousand nested parentheses would blow
//! the native stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below the red zone. On WASM the closure is called
//! directly.

/// Grow when less than this much stack remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// ```text
/// fn eval(&self, id: ExprId) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_depth_survives() {
        fn nest(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
        }

        assert_eq!(nest(50_000), 50_000);
    }

    #[test]
    fn passes_result_through() {
        let out: Result<&str, ()> = ensure_sufficient_stack(|| Ok("done"));
        assert_eq!(out, Ok("done"));
    }
}
