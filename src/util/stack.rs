/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Runs `f`, first moving to a fresh stack segment if little stack is left.
///
/// Wrap the recursive step of any walk over the syntax tree in this so that
/// nesting depth is bounded by memory rather than by the thread's stack size.
///
/// # Example
/// ```
/// use minipl::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
