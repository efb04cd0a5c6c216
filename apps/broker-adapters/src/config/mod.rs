//! Configuration module for the broker adapters.
//!
//! Broker credentials are resolved from the process environment once at
//! startup and injected into the adapters; nothing below the binary reads
//! environment variables on its own.
//!
//! # Usage
//!
//! ```rust,ignore
//! use broker_adapters::config::{BrokerSettings, load_dotenv};
//!
//! load_dotenv();
//! let settings = BrokerSettings::from_env()?;
//! let client = UpstoxAuthClient::new(settings.upstox_config())?;
//! ```

mod brokers;

use std::path::PathBuf;

use thiserror::Error;

pub use brokers::{
    BrokerSettings, ENV_BROKER_API_KEY, ENV_BROKER_API_SECRET, ENV_HTTP_TIMEOUT_SECS,
    ENV_REDIRECT_URL, ENV_UPSTOX_TOKEN_URL,
};

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Required environment variable is set but empty.
    #[error("Environment variable {0} is empty")]
    EmptyValue(String),

    /// Environment variable could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Raw value.
        value: String,
    },
}

/// Load a `.env` file from the working directory or its nearest ancestor.
///
/// Returns the path that was loaded, if any. Variables already present in
/// the environment are not overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    while let Some(parent) = dir.parent() {
        let env_path = parent.join(".env");
        if env_path.exists() && dotenvy::from_path(&env_path).is_ok() {
            return Some(env_path);
        }
        dir = parent;
    }
    None
}
