//! Orders domain module.
//!
//! This crate contains the order entity, its status lifecycle, and the
//! in-memory ledger that owns orders. Order creation validates the buyer
//! against the shared user registry; everything else is deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod ledger;
pub mod order;

pub use ledger::OrderLedger;
pub use order::{Order, OrderStatus};
