//! `storekit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, strongly-typed identifiers, and the injectable
//! capabilities (id generation, clock, logging sink) every service is built
//! against.

pub mod clock;
pub mod error;
pub mod id;
pub mod log;

pub use clock::{Clock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{IdSource, OrderId, ProductId, SessionTokenId, UserId, UuidSource};
pub use log::{LogSink, NoopSink};

/// Monetary amount in the smallest currency unit (e.g., cents).
///
/// Signed so that malformed (negative) inputs are representable and can be
/// rejected with a validation error instead of silently wrapping.
pub type Money = i64;
