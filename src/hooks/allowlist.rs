use anyhow::Result;
use tracing::debug;

use crate::cache::token_cache::TokenStore;
use crate::hooks::event::{Api, Event};
use crate::hooks::require_secret;
use crate::utils::constants::{ACCESS_DENIED_REASON, SECRET_ALLOWED_USER_EMAILS};

/// Post-challenge allowlist gate: only verified users whose email appears in
/// the comma-separated ALLOWED_USER_EMAILS secret may continue the reset.
pub async fn on_execute_post_challenge<S: TokenStore>(event: &Event, api: &Api<S>) -> Result<()> {
    let Some(raw_allowlist) = require_secret(event, api, SECRET_ALLOWED_USER_EMAILS) else {
        return Ok(());
    };

    if !event.user.email_verified {
        debug!("unverified email for user '{}'", event.user.user_id);
        api.access.deny(ACCESS_DENIED_REASON);
        return Ok(());
    }

    let permitted = match event.user.email.as_deref() {
        Some(email) => raw_allowlist
            .split(',')
            .map(str::trim)
            .any(|allowed| allowed == email),
        None => false,
    };

    if !permitted {
        debug!("email not in allowlist for user '{}'", event.user.user_id);
        api.access.deny(ACCESS_DENIED_REASON);
    }
    Ok(())
}
