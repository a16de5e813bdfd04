//! Session domain module.
//!
//! This crate issues and validates time-limited session tokens. Tokens are
//! bound to real user ids at login; validation hydrates the bound user from
//! the shared user registry. Expiry is the only end-of-life signal — there is
//! no revocation list.

pub mod authority;
pub mod token;

pub use authority::{MIN_PASSWORD_LEN, SessionAuthority};
pub use token::{SESSION_TTL_SECS, SessionToken};
