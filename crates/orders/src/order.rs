use serde::{Deserialize, Serialize};

use storekit_core::{DomainError, DomainResult, Money, OrderId, UserId};
use storekit_products::Product;

/// Order status lifecycle.
///
/// Transitions are `pending -> completed` and `pending -> cancelled` only;
/// both terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A placed order.
///
/// # Invariants
/// - `user_id` referenced an existing user at creation time.
/// - `products` are snapshots: copied values, not live catalog references,
///   so later catalog changes cannot rewrite order history.
/// - `total` equals the sum of snapshot prices at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub products: Vec<Product>,
    pub total: Money,
    pub status: OrderStatus,
}

impl Order {
    /// Move the order to `next`, if the lifecycle allows it.
    ///
    /// Status is the only field a transition touches; there are no cascading
    /// effects (no inventory adjustment, no notification).
    pub fn transition(&mut self, next: OrderStatus) -> DomainResult<()> {
        match (self.status, next) {
            (OrderStatus::Pending, OrderStatus::Completed)
            | (OrderStatus::Pending, OrderStatus::Cancelled) => {
                self.status = next;
                Ok(())
            }
            (current, requested) => Err(DomainError::invalid_state(format!(
                "order cannot move from {current} to {requested}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storekit_core::{OrderId, UserId};
    use uuid::Uuid;

    fn pending_order() -> Order {
        Order {
            id: OrderId::from_uuid(Uuid::now_v7()),
            user_id: UserId::from_uuid(Uuid::now_v7()),
            products: Vec::new(),
            total: 0,
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn pending_order_can_complete() {
        let mut order = pending_order();
        order.transition(OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn pending_order_can_cancel() {
        let mut order = pending_order();
        order.transition(OrderStatus::Cancelled).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn completed_order_is_final() {
        let mut order = pending_order();
        order.transition(OrderStatus::Completed).unwrap();

        for next in [OrderStatus::Pending, OrderStatus::Cancelled, OrderStatus::Completed] {
            let err = order.transition(next).unwrap_err();
            match err {
                DomainError::InvalidState(_) => {}
                _ => panic!("Expected InvalidState error for transition out of completed"),
            }
        }
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn cancelled_order_is_final() {
        let mut order = pending_order();
        order.transition(OrderStatus::Cancelled).unwrap();

        let err = order.transition(OrderStatus::Completed).unwrap_err();
        match err {
            DomainError::InvalidState(_) => {}
            _ => panic!("Expected InvalidState error for transition out of cancelled"),
        }
    }

    #[test]
    fn pending_to_pending_is_rejected() {
        let mut order = pending_order();
        let err = order.transition(OrderStatus::Pending).unwrap_err();
        match err {
            DomainError::InvalidState(_) => {}
            _ => panic!("Expected InvalidState error for pending -> pending"),
        }
    }
}
