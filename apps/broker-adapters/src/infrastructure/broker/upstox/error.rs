//! Upstox-specific error types.

use thiserror::Error;

/// Errors from the Upstox token exchange.
///
/// The `Display` text of each variant is the message shown to the user who
/// is logging in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// HTTP 200 without an access token in the body.
    #[error(
        "Authentication succeeded but no access token was returned. Please check the response."
    )]
    MissingAccessToken,

    /// API rejected the exchange and explained why.
    #[error("API error: [{}]", .messages.join("; "))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `errors[].message` entries from the response body.
        messages: Vec<String>,
    },

    /// API rejected the exchange without any error message.
    #[error("Authentication failed. Please try again.")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// Request could not be sent or the response could not be read.
    #[error("An exception occurred: {0}")]
    Network(String),

    /// Response body was not the expected JSON.
    #[error("An exception occurred: {0}")]
    JsonParse(String),
}

impl AuthError {
    /// HTTP status of the response, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Rejected { status } => Some(*status),
            Self::MissingAccessToken => Some(200),
            Self::Network(_) | Self::JsonParse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_joins_messages() {
        let err = AuthError::Api {
            status: 400,
            messages: vec!["bad code".to_string(), "expired".to_string()],
        };
        assert_eq!(err.to_string(), "API error: [bad code; expired]");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn rejected_uses_generic_message() {
        let err = AuthError::Rejected { status: 401 };
        assert_eq!(err.to_string(), "Authentication failed. Please try again.");
    }

    #[test]
    fn network_error_carries_description() {
        let err = AuthError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "An exception occurred: connection refused");
        assert_eq!(err.status(), None);
    }
}
