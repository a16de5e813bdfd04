use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use storekit_core::{DomainError, DomainResult, IdSource, LogSink, Money, ProductId};

use crate::product::Product;

/// In-memory store of products keyed by id.
///
/// Category listings come back in insertion order, so the store keeps an
/// insertion log beside the map. A poisoned lock is recovered, not
/// propagated: writers only insert fully-built values.
pub struct ProductCatalog {
    store: RwLock<Store>,
    ids: Arc<dyn IdSource>,
    log: Arc<dyn LogSink>,
}

#[derive(Default)]
struct Store {
    products: HashMap<ProductId, Product>,
    inserted: Vec<ProductId>,
}

impl ProductCatalog {
    pub fn new(ids: Arc<dyn IdSource>, log: Arc<dyn LogSink>) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            ids,
            log,
        }
    }

    /// Add a product to the catalog.
    ///
    /// Rejects a negative price with a validation error.
    pub fn create(&self, name: &str, price: Money, category: &str) -> DomainResult<Product> {
        if price < 0 {
            self.log
                .warn(&format!("rejected negative price {price} for product {name}"), None);
            return Err(DomainError::validation("price must be non-negative"));
        }

        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let product = Product {
            id: ProductId::from_uuid(self.ids.next()),
            name: name.to_string(),
            price,
            category: category.to_string(),
        };
        store.inserted.push(product.id);
        store.products.insert(product.id, product.clone());

        self.log.debug(&format!("product created: {}", product.id), None);
        Ok(product)
    }

    /// Pure lookup; no side effects.
    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("product"))
    }

    /// All products whose category matches exactly, in insertion order.
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store
            .inserted
            .iter()
            .filter_map(|id| store.products.get(id))
            .filter(|product| product.category == category)
            .cloned()
            .collect()
    }
}
