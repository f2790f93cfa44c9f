//! Identity provider port

use async_trait::async_trait;
use gdap_portal_domain::{AuthError, ClientCredentials, TokenGrant};

/// Performs `OAuth2` client-credentials exchanges.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Exchanges the client credentials for a bearer token.
    ///
    /// Implementations make a single attempt and never retry.
    ///
    /// # Errors
    /// Returns `AuthError::Rejected` on a non-success status and
    /// `AuthError::MalformedResponse` when the payload lacks
    /// `access_token` or `expires_in`.
    async fn exchange(&self, credentials: &ClientCredentials) -> Result<TokenGrant, AuthError>;
}
