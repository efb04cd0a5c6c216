//! Broker credentials from the environment.

use std::time::Duration;

use crate::infrastructure::broker::upstox::UpstoxConfig;

use super::ConfigError;

/// Broker API key.
pub const ENV_BROKER_API_KEY: &str = "BROKER_API_KEY";
/// Broker API secret.
pub const ENV_BROKER_API_SECRET: &str = "BROKER_API_SECRET";
/// OAuth redirect URL registered with the broker.
pub const ENV_REDIRECT_URL: &str = "REDIRECT_URL";
/// Optional override of the Upstox token endpoint.
pub const ENV_UPSTOX_TOKEN_URL: &str = "UPSTOX_TOKEN_URL";
/// Optional HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "BROKER_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and endpoints for the configured broker.
#[derive(Clone)]
pub struct BrokerSettings {
    /// API key.
    pub api_key: String,
    /// API secret.
    pub api_secret: String,
    /// OAuth redirect URL.
    pub redirect_url: String,
    /// Token endpoint override.
    pub token_url: Option<String>,
    /// HTTP request timeout.
    pub http_timeout: Duration,
}

impl BrokerSettings {
    /// Read settings from the process environment.
    ///
    /// Reads at call time; nothing is cached.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(name.to_string()));
            }
            Ok(value)
        };

        let api_key = require(ENV_BROKER_API_KEY)?;
        let api_secret = require(ENV_BROKER_API_SECRET)?;
        let redirect_url = require(ENV_REDIRECT_URL)?;

        let token_url = lookup(ENV_UPSTOX_TOKEN_URL).filter(|url| !url.trim().is_empty());

        let http_timeout = match lookup(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_HTTP_TIMEOUT_SECS.to_string(),
                        value: raw,
                    });
                }
            },
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            api_key,
            api_secret,
            redirect_url,
            token_url,
            http_timeout,
        })
    }

    /// Build the Upstox adapter configuration.
    #[must_use]
    pub fn upstox_config(&self) -> UpstoxConfig {
        let config = UpstoxConfig::new(
            self.api_key.clone(),
            self.api_secret.clone(),
            self.redirect_url.clone(),
        )
        .with_timeout(self.http_timeout);

        match &self.token_url {
            Some(url) => config.with_token_url(url.clone()),
            None => config,
        }
    }
}

impl std::fmt::Debug for BrokerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerSettings")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("token_url", &self.token_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::infrastructure::broker::upstox::DEFAULT_TOKEN_URL;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("BROKER_API_KEY", "key"),
        ("BROKER_API_SECRET", "secret"),
        ("REDIRECT_URL", "http://127.0.0.1:5000/upstox/callback"),
    ];

    #[test]
    fn reads_required_values() {
        let settings = BrokerSettings::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.api_secret, "secret");
        assert_eq!(settings.redirect_url, "http://127.0.0.1:5000/upstox/callback");
        assert_eq!(settings.token_url, None);
        assert_eq!(settings.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_secret_is_reported_by_name() {
        let err = BrokerSettings::from_lookup(lookup(&[
            ("BROKER_API_KEY", "key"),
            ("REDIRECT_URL", "http://localhost"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("BROKER_API_SECRET".to_string()));
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = BrokerSettings::from_lookup(lookup(&[
            ("BROKER_API_KEY", "  "),
            ("BROKER_API_SECRET", "secret"),
            ("REDIRECT_URL", "http://localhost"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyValue("BROKER_API_KEY".to_string()));
    }

    #[test]
    fn optional_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("UPSTOX_TOKEN_URL", "http://localhost:9000/token"));
        vars.push(("BROKER_HTTP_TIMEOUT_SECS", "5"));
        let settings = BrokerSettings::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(settings.token_url.as_deref(), Some("http://localhost:9000/token"));
        assert_eq!(settings.http_timeout, Duration::from_secs(5));

        let config = settings.upstox_config();
        assert_eq!(config.token_url, "http://localhost:9000/token");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("BROKER_HTTP_TIMEOUT_SECS", "soon"));
        let err = BrokerSettings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn upstox_config_defaults_to_production_endpoint() {
        let settings = BrokerSettings::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(settings.upstox_config().token_url, DEFAULT_TOKEN_URL);
    }

    #[test]
    fn debug_redacts_secret() {
        let settings = BrokerSettings::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(!format!("{settings:?}").contains("\"secret\""));
    }
}
