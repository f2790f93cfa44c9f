//! Single-entry in-memory bearer token cache.
//!
//! The portal talks to exactly one tenant, so the cache holds at most one
//! token. Entries are replaced wholesale on refresh and are never
//! invalidated early.

use std::sync::Arc;

use gdap_portal_domain::CachedToken;
use tokio::sync::RwLock;

/// Thread-safe single-slot token cache.
///
/// Clones share the same slot, so one instance created at startup can be
/// handed to every component that needs it.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    entry: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached entry, valid or not.
    pub async fn get(&self) -> Option<CachedToken> {
        self.entry.read().await.clone()
    }

    /// Get the cached entry if it has not expired at `now_epoch_ms`.
    pub async fn get_valid(&self, now_epoch_ms: i64) -> Option<CachedToken> {
        self.entry
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_valid_at(now_epoch_ms))
            .cloned()
    }

    /// Replace the cached entry.
    pub async fn set(&self, token: CachedToken) {
        *self.entry.write().await = Some(token);
    }

    /// Drop the cached entry.
    pub async fn clear(&self) {
        *self.entry.write().await = None;
    }
}
