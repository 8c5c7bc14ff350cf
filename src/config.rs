//! Client configuration.
//!
//! The API credential is injected here once at startup instead of being
//! read from the environment on every request, so the client stays pure
//! and testable against a mock server.

use std::time::Duration;

/// Environment variable holding the catalog API key
const API_KEY_ENV: &str = "POKEMONTCG_API_KEY";

/// Default public endpoint of the card catalog
pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Requests fail fast rather than hang an interactive session.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Optional API credential. The public catalog serves unauthenticated
    /// requests at a lower rate limit, so absence is tolerated.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Build a config from the environment. A missing or empty
    /// POKEMONTCG_API_KEY leaves the credential unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_some() {
            log::info!("Catalog API key configured from {}", API_KEY_ENV);
        } else {
            log::warn!(
                "{} not set, using unauthenticated catalog access",
                API_KEY_ENV
            );
        }
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Override the endpoint, e.g. to point at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_live_endpoint() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn with_base_url_overrides_endpoint() {
        let config = CatalogConfig::default().with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }
}
