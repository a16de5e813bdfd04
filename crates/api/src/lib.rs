//! `storekit-api` — the composed entry surface over the domain services.
//!
//! Callers (CLI, HTTP, UI — all out of scope here) talk to [`AppServices`]
//! and never to the registries directly.

pub mod services;

pub use services::AppServices;
