//! Management API port

use async_trait::async_trait;
use gdap_portal_domain::{InviteRequest, UpstreamError};
use serde_json::Value;

/// Authenticated calls to the upstream management API.
///
/// Payloads are opaque JSON and are returned exactly as parsed.
#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// Fetches the available GDAP role templates.
    ///
    /// # Errors
    /// Returns `UpstreamError::Status` when the API answers with a
    /// non-success status.
    async fn list_role_templates(&self, bearer_token: &str) -> Result<Value, UpstreamError>;

    /// Creates a GDAP invite for the given role mappings.
    ///
    /// # Errors
    /// Returns `UpstreamError::Status` when the API answers with a
    /// non-success status.
    async fn generate_invite(
        &self,
        bearer_token: &str,
        request: &InviteRequest,
    ) -> Result<Value, UpstreamError>;
}
