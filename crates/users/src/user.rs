use serde::{Deserialize, Serialize};

use storekit_core::{OrderId, UserId};

/// A registered user.
///
/// # Invariants
/// - `email` passed [`validate_email`] at creation time.
/// - `id` is immutable after creation.
/// - Users are never mutated or deleted once registered; `orders` records
///   order references by id and starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub orders: Vec<OrderId>,
}

/// Check that an address has the `local@domain.tld` shape.
///
/// Rules: exactly one `@`, non-empty local part, non-empty domain containing
/// at least one interior dot, no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with a label on both sides.
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty(),
        None => false,
    }
}
