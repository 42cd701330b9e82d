//! Stack safety for recursive passes over standardized trees.
//!
//! Lowering walks the standardized tree recursively. Programs produced by a
//! standardizer can nest deeply (long `aug` chains, deeply nested `let`s turned
//! into lambda/gamma pairs), so every recursive step goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! Evaluation itself does not recurse on the host stack: the CSE machine keeps
//! an explicit frame stack.
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - if less than this remains, the stack grows
//! - **Growth size**: 1MB per growth

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets this calls `stacker::maybe_grow`; on WASM it calls `f`
/// directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
