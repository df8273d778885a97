//! Stack growth for recursive tree walks.
//!
//! The parser, binder, lowering rewriter and evaluator all recurse once per
//! nesting level of the input. A submission such as `((((...1...))))` or a
//! long chain of nested blocks would overflow the native stack, so every
//! recursive entry point runs through [`ensure_sufficient_stack`].
//!
//! On native targets this grows the stack with `stacker` when fewer than
//! [`RED_ZONE`] bytes remain; on wasm it calls the closure directly.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// ```text
/// fn bind_expression(&mut self, expr: &Expr) -> BoundExpression {
///     ensure_sufficient_stack(|| self.bind_expression_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
