//! Upstox API request and response types.
//!
//! These types map directly to the Upstox login API format.

use serde::{Deserialize, Serialize};

/// Form body for `POST /v2/login/authorization/token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Authorization code from the login redirect.
    pub code: &'a str,
    /// API key.
    pub client_id: &'a str,
    /// API secret.
    pub client_secret: &'a str,
    /// Redirect URL registered with the app.
    pub redirect_uri: &'a str,
    /// Always `authorization_code`.
    pub grant_type: &'static str,
}

/// Successful token response.
///
/// Only the fields this adapter reads are modelled; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Access token for subsequent API calls.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Upstox client id of the logged-in user.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstoxErrorResponse {
    /// Individual errors.
    #[serde(default)]
    pub errors: Vec<UpstoxErrorDetail>,
}

/// One entry of `errors[]`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstoxErrorDetail {
    /// Upstox error code (e.g. `UDAPI100057`).
    #[serde(default)]
    pub error_code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_parses_upstox_shape() {
        let json = r#"{
            "status": "error",
            "errors": [{
                "errorCode": "UDAPI100057",
                "message": "Invalid Auth code",
                "propertyPath": null,
                "invalidValue": null,
                "error_code": "UDAPI100057",
                "property_path": null,
                "invalid_value": null
            }]
        }"#;
        let parsed: UpstoxErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].message.as_deref(), Some("Invalid Auth code"));
        assert_eq!(parsed.errors[0].error_code.as_deref(), Some("UDAPI100057"));
    }

    #[test]
    fn token_response_without_token() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"user_id": "AB1234"}"#).unwrap();
        assert!(parsed.access_token.is_none());
        assert_eq!(parsed.user_id.as_deref(), Some("AB1234"));
    }
}
