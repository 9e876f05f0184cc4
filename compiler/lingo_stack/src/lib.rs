//! Stack growth for recursive tree code.
//!
//! Expression trees come straight from user input, so nesting depth is
//! unbounded. The walker, deep copy and renderers recurse once per level;
//! wrapping each level in [`ensure_sufficient_stack`] lets `stacker` move the
//! computation onto a fresh segment before the native stack runs out.
//!
//! ```text
//! fn depth(expr: &SExpr) -> usize {
//!     ensure_sufficient_stack(|| {
//!         1 + expr.children().iter().map(depth).max().unwrap_or(0)
//!     })
//! }
//! ```

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first when less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
