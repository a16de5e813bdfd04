use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storekit_core::{SessionTokenId, UserId};

/// Session lifetime in seconds (one hour).
pub const SESSION_TTL_SECS: i64 = 3_600;

/// A live session.
///
/// # Invariants
/// - `expires_at > issued_at`.
/// - `token` is unique across all live tokens.
/// - `user_id` is the real id of the user that authenticated; validation
///   resolves it against the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: SessionTokenId,
    pub user_id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// A token stops validating the moment `now` reaches `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
