//! Products domain module.
//!
//! This crate contains the product entity and its in-memory catalog,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::Product;
