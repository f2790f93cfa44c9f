//! Bearer token acquisition backed by the [`TokenCache`].

use std::sync::Arc;

use gdap_portal_domain::{AuthError, CachedToken, ClientCredentials};
use tracing::{debug, info};

use super::TokenCache;
use crate::ports::{Clock, TokenEndpoint};

/// Hands out bearer tokens for management API calls.
///
/// A cached token is returned unchanged while the clock is before its
/// expiry. Otherwise a single client-credentials exchange is made and the
/// result replaces the cache entry. Concurrent callers that all miss the
/// cache each perform their own exchange; the last one to finish wins.
pub struct TokenAcquirer {
    cache: TokenCache,
    endpoint: Arc<dyn TokenEndpoint>,
    clock: Arc<dyn Clock>,
    credentials: ClientCredentials,
}

impl TokenAcquirer {
    /// Creates an acquirer over the given cache and ports.
    #[must_use]
    pub fn new(
        cache: TokenCache,
        endpoint: Arc<dyn TokenEndpoint>,
        clock: Arc<dyn Clock>,
        credentials: ClientCredentials,
    ) -> Self {
        Self {
            cache,
            endpoint,
            clock,
            credentials,
        }
    }

    /// The cache this acquirer reads and writes.
    #[must_use]
    pub const fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Returns a bearer token, exchanging credentials if the cache is stale.
    ///
    /// # Errors
    /// Propagates the `AuthError` of a failed exchange. Nothing is cached
    /// on failure.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        if let Some(cached) = self.cache.get_valid(self.clock.now_epoch_ms()).await {
            debug!("Using cached bearer token");
            return Ok(cached.token);
        }

        info!(client_id = %self.credentials.client_id, "Fetching new bearer token");
        let grant = self.endpoint.exchange(&self.credentials).await?;

        let cached = CachedToken::from_grant(&grant, self.clock.now_epoch_ms());
        self.cache.set(cached).await;

        info!(expires_in = grant.expires_in, "Bearer token cached");
        Ok(grant.access_token)
    }
}
