use std::sync::Arc;

use storekit_core::{
    Clock, DomainError, DomainResult, IdSource, LogSink, Money, OrderId, ProductId,
    SessionTokenId, SystemClock, UserId, UuidSource,
};
use storekit_observability::TracingSink;
use storekit_orders::{Order, OrderLedger, OrderStatus};
use storekit_products::{Product, ProductCatalog};
use storekit_session::{SessionAuthority, SessionToken};
use storekit_users::{User, UserRegistry};

/// The domain facade: one instance of each service, one entry surface.
///
/// Stateless beyond the services it composes. Every registry exists exactly
/// once and is shared by everything that reads it — the ledger validates
/// buyers against the same registry that `create_user` writes to, and the
/// session authority hydrates from it.
pub struct AppServices {
    users: Arc<UserRegistry>,
    products: Arc<ProductCatalog>,
    orders: Arc<OrderLedger>,
    sessions: Arc<SessionAuthority>,
}

impl AppServices {
    /// Production wiring: wall clock, UUIDv7 ids, tracing-backed logging.
    pub fn new() -> Self {
        Self::with_ports(
            Arc::new(SystemClock),
            Arc::new(UuidSource),
            Arc::new(TracingSink),
        )
    }

    /// Wire the facade over explicit capabilities.
    ///
    /// Tests substitute a manual clock, a deterministic id source, or a
    /// silent sink here.
    pub fn with_ports(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        let users = Arc::new(UserRegistry::new(Arc::clone(&ids), Arc::clone(&log)));
        let products = Arc::new(ProductCatalog::new(Arc::clone(&ids), Arc::clone(&log)));
        let orders = Arc::new(OrderLedger::new(
            Arc::clone(&users),
            Arc::clone(&ids),
            Arc::clone(&log),
        ));
        let sessions = Arc::new(SessionAuthority::new(
            Arc::clone(&users),
            ids,
            clock,
            log,
        ));

        Self {
            users,
            products,
            orders,
            sessions,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_user(&self, name: &str, email: &str) -> DomainResult<User> {
        self.users.create(name, email)
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<User> {
        self.users.get_by_id(id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_product(&self, name: &str, price: Money, category: &str) -> DomainResult<Product> {
        self.products.create(name, price, category)
    }

    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        self.products.get_by_id(id)
    }

    pub fn list_products_by_category(&self, category: &str) -> Vec<Product> {
        self.products.list_by_category(category)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Orders
    // ─────────────────────────────────────────────────────────────────────

    /// Place an order over product ids.
    ///
    /// Ids that do not resolve in the catalog are silently dropped
    /// (best-effort hydration, not a failure); the ledger then snapshots
    /// whatever resolved.
    pub fn create_order(&self, user_id: UserId, product_ids: &[ProductId]) -> DomainResult<Order> {
        let products: Vec<Product> = product_ids
            .iter()
            .filter_map(|id| self.products.get_by_id(*id).ok())
            .collect();

        self.orders.create(user_id, products)
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<Order> {
        self.orders.get_by_id(id)
    }

    pub fn transition_order(&self, id: OrderId, new_status: OrderStatus) -> DomainResult<Order> {
        self.orders.transition(id, new_status)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────────────────

    /// Authenticate by email and password.
    ///
    /// An unknown email fails exactly like a bad password: the caller learns
    /// nothing about which emails are registered.
    pub fn login(&self, email: &str, password: &str) -> DomainResult<SessionToken> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or(DomainError::AuthFailure)?;

        self.sessions.login(&user, password)
    }

    pub fn validate_token(&self, token: SessionTokenId) -> DomainResult<User> {
        self.sessions.validate(token)
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
