use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::helpers::time::now_i64;

/// Token record held by the cache: opaque bearer value and absolute expiry.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: i64, // UNIX timestamp
}

impl CachedToken {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// A token is usable only while expires_at is strictly in the future.
    pub fn is_expired(&self) -> bool {
        now_i64() >= self.expires_at
    }
}

/// Failure code reported by a store write. Logged by the caller, never fatal.
#[derive(Debug, Clone)]
pub struct StoreFailure {
    pub code: String,
}

impl StoreFailure {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// External key-value cache capability.
///
/// Last write wins per key; no coordination between concurrent callers is
/// provided or expected.
pub trait TokenStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<CachedToken>> + Send;
    fn set(
        &self,
        key: &str,
        token: CachedToken,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), StoreFailure>> + Send;
}

/// In-memory token store: key -> (record, evict_at)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, (CachedToken, i64)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl TokenStore for MemoryStore {
    /// Get the record if it exists and its write TTL has not elapsed
    async fn get(&self, key: &str) -> Option<CachedToken> {
        let map = self.inner.read().await;
        map.get(key)
            .filter(|(_, evict_at)| now_i64() < *evict_at)
            .map(|(token, _)| token.clone())
    }

    async fn set(&self, key: &str, token: CachedToken, ttl: Duration) -> Result<(), StoreFailure> {
        let mut map = self.inner.write().await;
        let evict_at = now_i64() + ttl.as_secs() as i64;
        map.insert(key.to_string(), (token, evict_at));
        Ok(())
    }
}
