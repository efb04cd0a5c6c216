//! Upstox Broker Adapter
//!
//! Login support for the Upstox API:
//! - Authorization-code to access-token exchange (OAuth 2.0)
//! - Error bodies flattened into a single caller-facing message

mod api_types;
mod auth;
mod config;
mod error;

pub use auth::UpstoxAuthClient;
pub use config::{DEFAULT_TOKEN_URL, UpstoxConfig};
pub use error::AuthError;
