//! Upstox adapter configuration.

use std::fmt;
use std::time::Duration;

/// Upstox OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.upstox.com/v2/login/authorization/token";

/// Configuration for the Upstox token exchange.
///
/// Values are resolved once at startup (see [`crate::config::BrokerSettings`])
/// and injected; the client never reads the environment itself.
#[derive(Clone)]
pub struct UpstoxConfig {
    /// API key (OAuth `client_id`).
    pub api_key: String,
    /// API secret (OAuth `client_secret`).
    pub api_secret: String,
    /// Redirect URL registered with the Upstox app.
    pub redirect_url: String,
    /// Token endpoint.
    pub token_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl UpstoxConfig {
    /// Create a new configuration against the production token endpoint.
    #[must_use]
    pub fn new(api_key: String, api_secret: String, redirect_url: String) -> Self {
        Self {
            api_key,
            api_secret,
            redirect_url,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the client at a different token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }
}

impl fmt::Debug for UpstoxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstoxConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
