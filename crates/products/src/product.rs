use serde::{Deserialize, Serialize};

use storekit_core::{Money, ProductId};

/// A catalog product.
///
/// # Invariants
/// - `price >= 0` (enforced at creation).
/// - `id` is immutable after creation; products are never mutated once
///   stored, so values copied into orders stay historically accurate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: Money,
    pub category: String,
}
