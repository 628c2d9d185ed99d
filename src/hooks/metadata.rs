use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use crate::cache::token_cache::TokenStore;
use crate::config::credentials::Credentials;
use crate::hooks::event::{Api, Event};
use crate::hooks::require_secret;
use crate::management::client::ManagementClient;
use crate::sources::oauth2::ExchangeClient;
use crate::sources::provider::get_access_token;
use crate::utils::constants::{
    DEFAULT_HTTP_TIMEOUT_MS, SECRET_AUDIENCE, SECRET_CLIENT_ID, SECRET_CLIENT_SECRET,
    SECRET_METADATA_DEFAULT_VALUE, SECRET_METADATA_KEY, SECRET_TENANT_DOMAIN,
};

/// Post-challenge metadata initializer: when the configured user-metadata
/// attribute is still unset, obtain a management token (cached across
/// invocations) and write the configured default to the user record.
pub async fn on_execute_post_challenge<S: TokenStore>(event: &Event, api: &Api<S>) -> Result<()> {
    let Some(metadata_key) = require_secret(event, api, SECRET_METADATA_KEY) else {
        return Ok(());
    };
    let Some(default_value) = require_secret(event, api, SECRET_METADATA_DEFAULT_VALUE) else {
        return Ok(());
    };
    let Some(domain) = require_secret(event, api, SECRET_TENANT_DOMAIN) else {
        return Ok(());
    };
    let Some(client_id) = require_secret(event, api, SECRET_CLIENT_ID) else {
        return Ok(());
    };
    let Some(client_secret) = require_secret(event, api, SECRET_CLIENT_SECRET) else {
        return Ok(());
    };

    if event
        .user
        .user_metadata
        .get(metadata_key)
        .is_some_and(is_truthy)
    {
        debug!(
            "user_metadata.{} already set for '{}', nothing to do",
            metadata_key, event.user.user_id
        );
        return Ok(());
    }

    let credentials = Credentials {
        domain: domain.to_owned(),
        client_id: client_id.to_owned(),
        client_secret: client_secret.to_owned(),
        audience: event.secret(SECRET_AUDIENCE).map(str::to_owned),
        timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
    };

    let exchange = ExchangeClient::new(credentials.timeout_ms)?;
    let token = get_access_token(&api.cache, &exchange, &credentials).await?;

    let management = ManagementClient::new(&credentials.domain, token, credentials.timeout_ms)?;
    management
        .update_user_metadata(&event.user.user_id, metadata_key, default_value)
        .await
}

/// Attribute presence follows the platform's scripting semantics: null,
/// false, zero and the empty string read as unset; arrays and objects do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
