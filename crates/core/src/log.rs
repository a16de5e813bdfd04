//! Logging sink port.
//!
//! Services log through an injected sink rather than a process-wide
//! singleton, which keeps the domain layer free of a concrete logging
//! dependency and of import-order hazards. The tracing-backed implementation
//! lives in `storekit-observability`.

use crate::id::UserId;

/// Free-form message sink with an optional user context.
///
/// No return value is consumed; sinks must not fail the caller.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str, user: Option<UserId>);
    fn warn(&self, message: &str, user: Option<UserId>);
    fn error(&self, message: &str, user: Option<UserId>);
    fn debug(&self, message: &str, user: Option<UserId>);
}

/// Sink that drops everything. Default for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn info(&self, _message: &str, _user: Option<UserId>) {}
    fn warn(&self, _message: &str, _user: Option<UserId>) {}
    fn error(&self, _message: &str, _user: Option<UserId>) {}
    fn debug(&self, _message: &str, _user: Option<UserId>) {}
}
