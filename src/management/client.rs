use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::credentials::base_url;

/// Management-API client scoped to one tenant and one bearer token.
#[derive(Debug, Clone)]
pub struct ManagementClient {
    client: Client,
    base: String,
    token: String,
}

impl ManagementClient {
    pub fn new(domain: &str, token: String, timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base: base_url(domain),
            token,
        })
    }

    /// Set a single user-metadata attribute on one user. Not retried;
    /// failure propagates to the invoking platform.
    pub async fn update_user_metadata(&self, user_id: &str, key: &str, value: &str) -> Result<()> {
        let url = format!("{}/api/v2/users/{}", self.base, user_id);

        let mut metadata = serde_json::Map::new();
        metadata.insert(key.to_owned(), Value::String(value.to_owned()));

        debug!("updating user_metadata.{} for '{}'", key, user_id);
        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "user_metadata": metadata }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("user metadata update failed: {}", response.status()));
        }
        Ok(())
    }
}
