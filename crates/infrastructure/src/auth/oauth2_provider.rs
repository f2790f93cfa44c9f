//! `OAuth2` client-credentials token endpoint adapter.
//!
//! Posts the form-encoded grant to `<authority>/<tenant>/oauth2/v2.0/token`
//! and parses the `access_token` / `expires_in` pair out of the answer.

use async_trait::async_trait;
use gdap_portal_application::ports::TokenEndpoint;
use gdap_portal_domain::{AuthError, ClientCredentials, DEFAULT_AUTHORITY_URL, TokenGrant};
use serde::{Deserialize, Deserializer};
use tracing::warn;

/// `OAuth2` token response from token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(deserialize_with = "seconds")]
    expires_in: i64,
}

/// `OAuth2` error response.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

// Some identity providers send `expires_in` as a string.
fn seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(i64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(n) => Ok(n),
        Seconds::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Client-credentials token endpoint.
///
/// Makes exactly one request per exchange; caching lives in the
/// application layer.
pub struct OAuth2Provider {
    http_client: reqwest::Client,
    authority: String,
}

impl OAuth2Provider {
    /// Create a provider against the default Microsoft identity platform authority.
    #[must_use]
    pub fn new() -> Self {
        Self::with_authority(DEFAULT_AUTHORITY_URL)
    }

    /// Create a provider against a custom authority base URL.
    #[must_use]
    pub fn with_authority(authority: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            authority: authority.into(),
        }
    }

    /// The authority base URL token requests are sent to.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    fn form_body(credentials: &ClientCredentials) -> Result<String, AuthError> {
        let params = [
            ("client_id", credentials.client_id.clone()),
            ("client_secret", credentials.client_secret.clone()),
            ("scope", credentials.scope()),
            ("grant_type", "client_credentials".to_string()),
        ];

        serde_urlencoded::to_string(params).map_err(|e| AuthError::Network {
            message: format!("Failed to encode form: {e}"),
        })
    }
}

impl Default for OAuth2Provider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenEndpoint for OAuth2Provider {
    async fn exchange(&self, credentials: &ClientCredentials) -> Result<TokenGrant, AuthError> {
        let body = Self::form_body(credentials)?;

        let response = self
            .http_client
            .post(credentials.token_url(&self.authority))
            .header(
                reqwest::header::CONTENT_TYPE,
                mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
            )
            .body(body)
            .send()
            .await
            .map_err(|e: reqwest::Error| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<TokenErrorResponse>(&error_text) {
                warn!(
                    status = status.as_u16(),
                    error = %error_response.error,
                    description = error_response.error_description.as_deref().unwrap_or(""),
                    "Token endpoint rejected client credentials"
                );
            }
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body: error_text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e: reqwest::Error| AuthError::Network {
                message: format!("Failed to read token response: {e}"),
            })?;

        let token_response: TokenResponse =
            serde_json::from_str(&text).map_err(|e| AuthError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(TokenGrant {
            access_token: token_response.access_token,
            expires_in: token_response.expires_in,
        })
    }
}
