pub mod allowlist;
pub mod event;
pub mod metadata;

use crate::cache::token_cache::TokenStore;
use crate::hooks::event::{Api, Event};

/// Fetch a required secret, denying the invocation with a configuration
/// reason when it is absent or empty. Configuration errors are detected
/// before any network call and are never retried.
pub(crate) fn require_secret<'a, S: TokenStore>(
    event: &'a Event,
    api: &Api<S>,
    name: &str,
) -> Option<&'a str> {
    let value = event.secret(name);
    if value.is_none() {
        api.access.deny(&format!("{} secret is not configured.", name));
    }
    value
}
