use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Duration;

use storekit_core::{Clock, DomainError, DomainResult, IdSource, LogSink, SessionTokenId};
use storekit_users::{User, UserRegistry};

use crate::token::{SESSION_TTL_SECS, SessionToken};

/// Minimum accepted password length.
///
/// Placeholder credential policy, not a security contract: there is no hash
/// to compare against in this system.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Issues and validates time-limited session tokens.
///
/// Login binds a token to an already-resolved user; the registry is consulted
/// only on the validate path, to hydrate the bound user. A poisoned lock is
/// recovered, not propagated: writers only insert fully-built values.
pub struct SessionAuthority {
    tokens: RwLock<HashMap<SessionTokenId, SessionToken>>,
    users: Arc<UserRegistry>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn LogSink>,
}

impl SessionAuthority {
    pub fn new(
        users: Arc<UserRegistry>,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            users,
            ids,
            clock,
            log,
        }
    }

    /// Issue a session token bound to `user`.
    ///
    /// The caller has already resolved the user; this only applies the
    /// credential policy (non-empty email, password of at least
    /// [`MIN_PASSWORD_LEN`] characters). Failures carry no detail.
    pub fn login(&self, user: &User, password: &str) -> DomainResult<SessionToken> {
        self.log.info(&format!("login attempt for email: {}", user.email), None);

        if user.email.is_empty() || password.len() < MIN_PASSWORD_LEN {
            self.log.warn(&format!("authentication failed for email: {}", user.email), None);
            return Err(DomainError::AuthFailure);
        }

        let issued_at = self.clock.now();
        let token = SessionToken {
            token: SessionTokenId::from_uuid(self.ids.next()),
            user_id: user.id,
            issued_at,
            expires_at: issued_at + Duration::seconds(SESSION_TTL_SECS),
        };

        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.token, token.clone());

        self.log.info("user authenticated", Some(user.id));
        Ok(token)
    }

    /// Resolve a token back to the user it was issued for.
    ///
    /// Unknown and expired tokens fail identically (no detail). A token whose
    /// backing user has vanished from the registry fails with not-found.
    pub fn validate(&self, token: SessionTokenId) -> DomainResult<User> {
        let session = self
            .tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token)
            .cloned();

        let Some(session) = session else {
            self.log.warn("unknown session token", None);
            return Err(DomainError::AuthFailure);
        };

        if session.is_expired_at(self.clock.now()) {
            self.log.warn("expired session token", Some(session.user_id));
            return Err(DomainError::AuthFailure);
        }

        let user = self.users.get_by_id(session.user_id)?;
        self.log.debug("token validated", Some(user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;
    use storekit_core::{NoopSink, UserId, UuidSource};
    use uuid::Uuid;

    /// Manually advanceable clock for crossing the expiry instant.
    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn starting_at(now: DateTime<Utc>) -> Self {
            Self { now: Mutex::new(now) }
        }

        fn advance(&self, delta: Duration) {
            *self.now.lock().unwrap() += delta;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn setup() -> (Arc<UserRegistry>, Arc<ManualClock>, SessionAuthority) {
        let ids: Arc<dyn IdSource> = Arc::new(UuidSource);
        let log: Arc<dyn LogSink> = Arc::new(NoopSink);
        let users = Arc::new(UserRegistry::new(Arc::clone(&ids), Arc::clone(&log)));
        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let authority = SessionAuthority::new(
            Arc::clone(&users),
            ids,
            Arc::clone(&clock) as Arc<dyn Clock>,
            log,
        );
        (users, clock, authority)
    }

    #[test]
    fn login_issues_token_bound_to_the_real_user() {
        let (users, clock, authority) = setup();
        let user = users.create("Ada", "x@y.com").unwrap();

        let token = authority.login(&user, "longenough").unwrap();
        assert_eq!(token.user_id, user.id);
        assert_eq!(
            token.expires_at,
            clock.now() + Duration::seconds(SESSION_TTL_SECS)
        );
        assert!(token.expires_at > token.issued_at);
    }

    #[test]
    fn login_rejects_short_password() {
        let (users, _clock, authority) = setup();
        let user = users.create("Ada", "x@y.com").unwrap();

        let err = authority.login(&user, "short").unwrap_err();
        match err {
            DomainError::AuthFailure => {}
            _ => panic!("Expected AuthFailure for five-character password"),
        }
    }

    #[test]
    fn login_accepts_exactly_six_characters() {
        let (users, _clock, authority) = setup();
        let user = users.create("Ada", "x@y.com").unwrap();
        assert!(authority.login(&user, "sixsix").is_ok());
    }

    #[test]
    fn validate_hydrates_user_from_registry() {
        let (users, _clock, authority) = setup();
        let user = users.create("Ada", "x@y.com").unwrap();
        let token = authority.login(&user, "longenough").unwrap();

        let resolved = authority.validate(token.token).unwrap();
        assert_eq!(resolved, user);
    }

    #[test]
    fn validate_rejects_unknown_token() {
        let (_users, _clock, authority) = setup();
        let stranger = SessionTokenId::from_uuid(Uuid::now_v7());
        let err = authority.validate(stranger).unwrap_err();
        match err {
            DomainError::AuthFailure => {}
            _ => panic!("Expected AuthFailure for unknown token"),
        }
    }

    #[test]
    fn validate_fails_once_the_expiry_instant_is_reached() {
        let (users, clock, authority) = setup();
        let user = users.create("Ada", "x@y.com").unwrap();
        let token = authority.login(&user, "longenough").unwrap();

        clock.advance(Duration::seconds(SESSION_TTL_SECS - 1));
        assert!(authority.validate(token.token).is_ok());

        clock.advance(Duration::seconds(1));
        let err = authority.validate(token.token).unwrap_err();
        match err {
            DomainError::AuthFailure => {}
            _ => panic!("Expected AuthFailure at the expiry instant"),
        }
    }

    #[test]
    fn validate_reports_vanished_backing_user() {
        let (_users, _clock, authority) = setup();

        // A user value that was never registered: the token binds fine, but
        // hydration has nothing to resolve.
        let ghost = User {
            id: UserId::from_uuid(Uuid::now_v7()),
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            orders: Vec::new(),
        };
        let token = authority.login(&ghost, "longenough").unwrap();

        let err = authority.validate(token.token).unwrap_err();
        match err {
            DomainError::NotFound(_) => {}
            _ => panic!("Expected NotFound for a vanished backing user"),
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the credential policy is exactly "six or more
            /// characters".
            #[test]
            fn password_policy_is_a_length_check(password in "[a-zA-Z0-9]{0,12}") {
                let (users, _clock, authority) = setup();
                let user = users.create("Ada", "x@y.com").unwrap();

                let outcome = authority.login(&user, &password);
                if password.len() >= MIN_PASSWORD_LEN {
                    prop_assert!(outcome.is_ok());
                } else {
                    prop_assert_eq!(outcome.unwrap_err(), DomainError::AuthFailure);
                }
            }

            /// Property: token values are unique across live sessions.
            #[test]
            fn token_values_are_unique(count in 1usize..50) {
                let (users, _clock, authority) = setup();
                let user = users.create("Ada", "x@y.com").unwrap();

                let mut seen = std::collections::HashSet::new();
                for _ in 0..count {
                    let token = authority.login(&user, "longenough").unwrap();
                    prop_assert!(seen.insert(token.token), "duplicate token issued");
                }
            }
        }
    }
}
