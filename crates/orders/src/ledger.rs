use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use storekit_core::{DomainError, DomainResult, IdSource, LogSink, Money, OrderId, UserId};
use storekit_products::Product;
use storekit_users::UserRegistry;

use crate::order::{Order, OrderStatus};

/// In-memory store of orders keyed by id.
///
/// The ledger does not own users; it reads the shared registry injected at
/// construction. There must be exactly one registry instance behind the whole
/// facade, otherwise the existence check validates against the wrong world.
/// A poisoned lock is recovered, not propagated: writers only insert
/// fully-built values.
pub struct OrderLedger {
    store: RwLock<HashMap<OrderId, Order>>,
    users: Arc<UserRegistry>,
    ids: Arc<dyn IdSource>,
    log: Arc<dyn LogSink>,
}

impl OrderLedger {
    pub fn new(users: Arc<UserRegistry>, ids: Arc<dyn IdSource>, log: Arc<dyn LogSink>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            users,
            ids,
            log,
        }
    }

    /// Place an order for `user_id` over the given product snapshots.
    ///
    /// Fails with not-found when the user does not exist; the check runs
    /// before an order id is allocated, so a failed call leaves no trace.
    /// The total is the sum of snapshot prices (zero for an empty order) and
    /// the order starts out pending. A total that does not fit in [`Money`]
    /// is a validation failure, never a wrapped value.
    pub fn create(&self, user_id: UserId, products: Vec<Product>) -> DomainResult<Order> {
        let user = self.users.get_by_id(user_id)?;

        let total = products
            .iter()
            .try_fold(0, |sum: Money, product| sum.checked_add(product.price))
            .ok_or_else(|| DomainError::validation("order total overflows"))?;

        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let order = Order {
            id: OrderId::from_uuid(self.ids.next()),
            user_id: user.id,
            products,
            total,
            status: OrderStatus::Pending,
        };
        store.insert(order.id, order.clone());

        self.log.info(&format!("order {} placed, total {total}", order.id), Some(user.id));
        Ok(order)
    }

    /// Pure lookup; no side effects.
    pub fn get_by_id(&self, id: OrderId) -> DomainResult<Order> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("order"))
    }

    /// Move an order to `new_status`.
    ///
    /// Only `pending -> completed` and `pending -> cancelled` are allowed;
    /// any other request fails with an invalid-state error and leaves the
    /// order untouched.
    pub fn transition(&self, id: OrderId, new_status: OrderStatus) -> DomainResult<Order> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let order = store
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("order"))?;

        order.transition(new_status)?;
        let updated = order.clone();
        drop(store);

        self.log.info(&format!("order {id} moved to {new_status}"), Some(updated.user_id));
        Ok(updated)
    }
}
