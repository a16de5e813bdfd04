//! Users domain module.
//!
//! This crate contains the user entity and its in-memory registry,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod registry;
pub mod user;

pub use registry::UserRegistry;
pub use user::{User, validate_email};
