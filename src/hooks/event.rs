use std::collections::HashMap;
use std::sync::Mutex;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::cache::token_cache::TokenStore;

/// Inbound invocation payload delivered by the platform at the
/// post-challenge point of a password reset.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub secrets: HashMap<String, String>,
    pub user: User,
}

impl Event {
    /// Configured secret by name; empty values count as unset.
    pub fn secret(&self, name: &str) -> Option<&str> {
        self.secrets
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub user_metadata: serde_json::Map<String, Value>,
}

/// Platform api object handed to a hook: access control plus the token cache.
#[derive(Debug)]
pub struct Api<S: TokenStore> {
    pub access: Access,
    pub cache: S,
}

impl<S: TokenStore> Api<S> {
    pub fn new(cache: S) -> Self {
        Self {
            access: Access::default(),
            cache,
        }
    }
}

/// Records the denial issued during one invocation, if any.
#[derive(Debug, Default)]
pub struct Access {
    denied: Mutex<Option<String>>,
}

impl Access {
    /// Abort the reset flow with the given reason. Last reason wins.
    pub fn deny(&self, reason: &str) {
        info!("access denied: {}", reason);
        let mut denied = self.denied.lock().expect("access lock poisoned");
        *denied = Some(reason.to_owned());
    }

    pub fn is_denied(&self) -> bool {
        self.denied.lock().expect("access lock poisoned").is_some()
    }

    pub fn denied_reason(&self) -> Option<String> {
        self.denied.lock().expect("access lock poisoned").clone()
    }
}
