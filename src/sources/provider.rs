use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::cache::token_cache::{CachedToken, TokenStore};
use crate::config::credentials::Credentials;
use crate::helpers::time::now_i64;
use crate::sources::oauth2::ExchangeClient;

/// Return a valid bearer token for the given credentials.
///
/// Reuses a cached unexpired token when available; otherwise performs one
/// client-credentials exchange and writes the result back best-effort.
/// Concurrent callers racing past an expired entry may each perform an
/// exchange; the store keeps the last write per key.
pub async fn get_access_token(
    cache: &impl TokenStore,
    client: &ExchangeClient,
    credentials: &Credentials,
) -> Result<String> {
    let key = credentials.cache_key();

    if let Some(cached) = cache.get(&key).await {
        if !cached.is_expired() {
            debug!("token cache hit for '{}'", key);
            return Ok(cached.value);
        }
    }

    let issued = client.fetch_token(credentials).await?;
    let token = CachedToken::new(
        issued.access_token.clone(),
        now_i64() + issued.expires_in as i64,
    );

    // A rejected write degrades future calls to cache-miss, nothing more.
    if let Err(failure) = cache
        .set(&key, token, Duration::from_secs(issued.expires_in))
        .await
    {
        warn!("cache write for '{}' failed: {}", key, failure);
    }

    Ok(issued.access_token)
}
