//! Client-credentials authentication types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds subtracted from `expires_in` before a token is considered stale.
pub const EXPIRY_MARGIN_SECS: i64 = 600;

/// Default identity provider authority.
pub const DEFAULT_AUTHORITY_URL: &str = "https://login.microsoftonline.com";

/// Credentials for the `OAuth2` client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// Directory (tenant) the application is registered in.
    pub tenant_id: String,
    /// Application (client) id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
}

impl ClientCredentials {
    /// Creates a new set of client credentials.
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// The `.default` scope of the API registered under this client id.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("api://{}/.default", self.client_id)
    }

    /// Token endpoint for this tenant under the given authority.
    #[must_use]
    pub fn token_url(&self, authority: &str) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            authority.trim_end_matches('/'),
            self.tenant_id
        )
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Successful payload of a token endpoint exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// The bearer token.
    pub access_token: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
}

/// A bearer token held in the process-wide cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    /// The bearer token.
    pub token: String,
    /// Unix epoch milliseconds after which the token must be re-acquired.
    pub expires_at_epoch_ms: i64,
}

impl CachedToken {
    /// Creates a cache entry from a fresh grant obtained at `now_epoch_ms`.
    ///
    /// The entry expires [`EXPIRY_MARGIN_SECS`] before the token itself. A
    /// grant shorter than the margin yields an entry that is already stale.
    #[must_use]
    pub fn from_grant(grant: &TokenGrant, now_epoch_ms: i64) -> Self {
        let lifetime_ms = grant
            .expires_in
            .saturating_sub(EXPIRY_MARGIN_SECS)
            .saturating_mul(1000);
        Self {
            token: grant.access_token.clone(),
            expires_at_epoch_ms: now_epoch_ms.saturating_add(lifetime_ms),
        }
    }

    /// Returns true while `now_epoch_ms` is strictly before the expiry.
    #[must_use]
    pub const fn is_valid_at(&self, now_epoch_ms: i64) -> bool {
        now_epoch_ms < self.expires_at_epoch_ms
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        bearer_header(&self.token)
    }
}

/// Formats a bearer Authorization header value.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token exchange errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("token request failed: {status} {reason} - {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
        /// Response body text.
        body: String,
    },
    /// The exchange could not be sent or its body could not be read.
    #[error("token request failed: {message}")]
    Network {
        /// Error description.
        message: String,
    },
    /// The token endpoint answered with an unexpected payload.
    #[error("malformed token response: {message}")]
    MalformedResponse {
        /// Error description.
        message: String,
    },
}
