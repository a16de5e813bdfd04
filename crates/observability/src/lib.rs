//! Tracing, logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Domain logging sink backed by `tracing`.
pub mod sink;

pub use sink::TracingSink;
