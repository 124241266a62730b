//! Stack safety for deep recursion.
//!
//! The program-node builder and the interpreter both recurse once per nesting
//! level of the program. The interpreter's explicit depth limits decide when a
//! program is too deep; this crate makes sure the host stack is never the
//! thing that gives out first.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: plain passthrough.
//!
//! # Usage
//!
//! ```text
//! fn exec(&mut self, node: &Node) -> ExecResult {
//!     ensure_sufficient_stack(|| {
//!         // ... recursive walk ...
//!     })
//! }
//! ```

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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

#[cfg(test)]
mod tests;
