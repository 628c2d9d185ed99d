//! Shared constants and invariants

/// Request timeout passed to both the credential exchange and the
/// management update. Threaded through call sites, never ambient.
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 1000;

/// Cache keys are namespaced per client id (and audience, when present).
pub const ACCESS_TOKEN_KEY_PREFIX: &str = "access_token_";

// Secrets consumed by the allowlist hook
pub const SECRET_ALLOWED_USER_EMAILS: &str = "ALLOWED_USER_EMAILS";

// Secrets consumed by the metadata-initialization hook
pub const SECRET_METADATA_KEY: &str = "METADATA_KEY";
pub const SECRET_METADATA_DEFAULT_VALUE: &str = "METADATA_DEFAULT_VALUE";
pub const SECRET_TENANT_DOMAIN: &str = "TENANT_DOMAIN";
pub const SECRET_CLIENT_ID: &str = "CLIENT_ID";
pub const SECRET_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const SECRET_AUDIENCE: &str = "AUDIENCE";

/// Reason handed to `access.deny` for any allowlist rejection.
pub const ACCESS_DENIED_REASON: &str = "access denied.";
