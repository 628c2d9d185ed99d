use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::credentials::{base_url, Credentials};

/// Issued token and its lifetime as returned by the exchange endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64, // seconds
}

/// Client-credentials exchange against the tenant's token endpoint.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    client: Client,
}

impl ExchangeClient {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { client })
    }

    /// Perform one client-credentials grant. The only network I/O in the
    /// token path; failures propagate, there is no fallback token source.
    pub async fn fetch_token(&self, credentials: &Credentials) -> Result<IssuedToken> {
        let url = format!("{}/oauth/token", base_url(&credentials.domain));

        let mut body = HashMap::new();
        body.insert("grant_type", "client_credentials".to_owned());
        body.insert("client_id", credentials.client_id.clone());
        body.insert("client_secret", credentials.client_secret.clone());
        body.insert("audience", credentials.effective_audience());

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("token exchange failed: {}", response.status()));
        }

        Ok(response.json::<IssuedToken>().await?)
    }
}
