//! Authorization-code token exchange.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::api_types::{TokenRequest, TokenResponse, UpstoxErrorResponse};
use super::config::UpstoxConfig;
use super::error::AuthError;

/// Blocking HTTP client for the Upstox login API.
///
/// One POST per call: no retries, no token caching. Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstoxAuthClient {
    client: Client,
    config: UpstoxConfig,
}

impl UpstoxAuthClient {
    /// Create a client with its own connection pool.
    ///
    /// Must not be called from inside an async runtime (blocking client).
    pub fn new(config: UpstoxConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client on top of an existing shared HTTP client.
    ///
    /// The shared client's timeout applies; `config.timeout` is ignored.
    #[must_use]
    pub fn with_client(config: UpstoxConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Exchange an authorization code for an access token.
    ///
    /// Blocks for one round trip. Every failure, including transport errors
    /// and malformed bodies, is returned as an [`AuthError`] whose message
    /// can be shown to the user as-is.
    pub fn authenticate_broker(&self, authorization_code: &str) -> Result<String, AuthError> {
        let form = TokenRequest {
            code: authorization_code,
            client_id: &self.config.api_key,
            client_secret: &self.config.api_secret,
            redirect_uri: &self.config.redirect_url,
            grant_type: "authorization_code",
        };

        let result = self
            .client
            .post(&self.config.token_url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .and_then(|response| {
                let status = response.status();
                response.text().map(|body| (status, body))
            })
            .map_err(|e| AuthError::Network(e.to_string()))
            .and_then(|(status, body)| interpret_token_response(status, &body));

        match &result {
            Ok(_) => tracing::info!("Upstox token exchange succeeded"),
            Err(e) => tracing::warn!(
                status = ?e.status(),
                error = %e,
                "Upstox token exchange failed"
            ),
        }

        result
    }
}

/// Turn a token endpoint response into the token or a user-facing error.
fn interpret_token_response(status: StatusCode, body: &str) -> Result<String, AuthError> {
    if status == StatusCode::OK {
        let response: TokenResponse =
            serde_json::from_str(body).map_err(|e| AuthError::JsonParse(e.to_string()))?;
        if let Some(user_id) = &response.user_id {
            tracing::debug!(user_id = %user_id, "Upstox login response received");
        }
        return response.access_token.ok_or(AuthError::MissingAccessToken);
    }

    let response: UpstoxErrorResponse =
        serde_json::from_str(body).map_err(|e| AuthError::JsonParse(e.to_string()))?;

    for detail in &response.errors {
        tracing::debug!(
            code = ?detail.error_code,
            message = ?detail.message,
            "Upstox error detail"
        );
    }

    let messages: Vec<String> = response
        .errors
        .into_iter()
        .filter_map(|detail| detail.message)
        .filter(|message| !message.is_empty())
        .collect();

    if messages.is_empty() {
        Err(AuthError::Rejected {
            status: status.as_u16(),
        })
    } else {
        Err(AuthError::Api {
            status: status.as_u16(),
            messages,
        })
    }
}
