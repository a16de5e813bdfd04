use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use storekit_core::{DomainError, DomainResult, IdSource, LogSink, UserId};

use crate::user::{User, validate_email};

/// In-memory store of users keyed by id.
///
/// The write lock covers id allocation and insert together, so ids stay
/// unique under arbitrary interleavings. Share one instance per process via
/// `Arc` — every collaborator must see the same users. A poisoned lock is
/// recovered, not propagated: writers only insert fully-built values.
pub struct UserRegistry {
    store: RwLock<Store>,
    ids: Arc<dyn IdSource>,
    log: Arc<dyn LogSink>,
}

#[derive(Default)]
struct Store {
    users: HashMap<UserId, User>,
    // Insertion-ordered ids; HashMap iteration order is unspecified.
    inserted: Vec<UserId>,
}

impl UserRegistry {
    pub fn new(ids: Arc<dyn IdSource>, log: Arc<dyn LogSink>) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            ids,
            log,
        }
    }

    /// Register a new user.
    ///
    /// Fails with a validation error when the email does not have the
    /// `local@domain.tld` shape. On success the user is stored under a fresh
    /// id and returned.
    pub fn create(&self, name: &str, email: &str) -> DomainResult<User> {
        if !validate_email(email) {
            self.log.warn(&format!("invalid email format: {email}"), None);
            return Err(DomainError::validation("invalid email format"));
        }

        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let user = User {
            id: UserId::from_uuid(self.ids.next()),
            name: name.to_string(),
            email: email.to_string(),
            orders: Vec::new(),
        };
        store.inserted.push(user.id);
        store.users.insert(user.id, user.clone());

        self.log.info("user created", Some(user.id));
        Ok(user)
    }

    /// Pure lookup; no side effects.
    pub fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// First user with an exact email match, in insertion order.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store
            .inserted
            .iter()
            .filter_map(|id| store.users.get(id))
            .find(|user| user.email == email)
            .cloned()
    }
}
