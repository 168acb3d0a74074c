//! Stack safety utilities for deep recursion.
//!
//! The evaluator walks the AST with native recursion: one host stack frame
//! per nested expression, statement, and function call. A mint program's
//! recursion depth therefore maps directly onto host stack depth, and a
//! deeply recursive program would overflow an ordinary 8MB stack long
//! before any language-level limit applies.
//!
//! [`ensure_sufficient_stack`] wraps each recursive entry point and grows
//! the stack on demand, so stack exhaustion becomes a far-off resource
//! limit rather than an everyday crash. Exhaustion past what growth can
//! serve remains a fatal host condition, not a recoverable language error.
//!
//! # Platform Support
//!
//! - **Native targets**: uses the `stacker` crate to grow the stack.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).

/// Minimum stack space to keep available (64KB red zone).
///
/// If less than this amount remains, the stack is grown before recursing.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB per growth).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`.
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
