// tests/common/mod.rs
use std::time::Duration;

use crate::cache::token_cache::{CachedToken, StoreFailure, TokenStore};
use crate::hooks::event::{Event, User};
use crate::utils::logging::{init_logging, LoggingConfig};

/// Install the compact subscriber once; later calls are no-ops.
pub fn init_test_logging() {
    init_logging(&LoggingConfig::default());
}

/// Build an event from literal secrets and a user.
pub fn event_with(secrets: &[(&str, &str)], user: User) -> Event {
    Event {
        secrets: secrets
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        user,
    }
}

pub fn user(user_id: &str, email: Option<&str>, email_verified: bool) -> User {
    User {
        user_id: user_id.to_owned(),
        email: email.map(str::to_owned),
        email_verified,
        user_metadata: serde_json::Map::new(),
    }
}

/// Store whose writes always fail with a fixed code. Reads always miss.
#[derive(Debug, Clone, Default)]
pub struct RejectingStore;

impl TokenStore for RejectingStore {
    async fn get(&self, _key: &str) -> Option<CachedToken> {
        None
    }

    async fn set(
        &self,
        _key: &str,
        _token: CachedToken,
        _ttl: Duration,
    ) -> Result<(), StoreFailure> {
        Err(StoreFailure::new("write_rejected"))
    }
}
