use crate::utils::constants::ACCESS_TOKEN_KEY_PREFIX;

/// ================================
/// Client credentials
/// ================================
///
/// Immutable credential bag supplied per hook invocation, built from the
/// platform's secrets. Never persisted by this crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    pub audience: Option<String>,
    pub timeout_ms: u64,
}

impl Credentials {
    /// Cache key namespacing tokens per client id and, when present, audience.
    pub fn cache_key(&self) -> String {
        match &self.audience {
            Some(audience) => format!("{}{}_{}", ACCESS_TOKEN_KEY_PREFIX, self.client_id, audience),
            None => format!("{}{}", ACCESS_TOKEN_KEY_PREFIX, self.client_id),
        }
    }

    /// Supplied audience, or the conventional management-API root of the domain.
    pub fn effective_audience(&self) -> String {
        self.audience
            .clone()
            .unwrap_or_else(|| format!("{}/api/v2/", base_url(&self.domain)))
    }
}

/// Tenant domains are normally bare hostnames; an explicit scheme is kept
/// as-is so local endpoints stay reachable.
pub fn base_url(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.trim_end_matches('/').to_owned()
    } else {
        format!("https://{}", domain)
    }
}
