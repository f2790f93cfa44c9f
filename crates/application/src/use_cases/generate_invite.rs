//! Generate invite use case.

use std::sync::Arc;

use gdap_portal_domain::InviteRequest;
use serde_json::Value;
use tracing::debug;

use crate::ApplicationResult;
use crate::auth::TokenAcquirer;
use crate::ports::ManagementApi;

/// Use case relaying a GDAP invite creation to the management API.
pub struct GenerateInvite {
    tokens: Arc<TokenAcquirer>,
    api: Arc<dyn ManagementApi>,
}

impl GenerateInvite {
    /// Creates a new `GenerateInvite` use case.
    #[must_use]
    pub fn new(tokens: Arc<TokenAcquirer>, api: Arc<dyn ManagementApi>) -> Self {
        Self { tokens, api }
    }

    /// Requests an invite for the role mappings in `input`.
    ///
    /// The role mappings are not inspected.
    ///
    /// # Errors
    /// - Returns `ApplicationError::Auth` if no token could be obtained
    /// - Returns `ApplicationError::Upstream` if the management API call fails
    pub async fn execute(&self, input: InviteRequest) -> ApplicationResult<Value> {
        let token = self.tokens.get_token().await?;
        debug!(
            has_role_mappings = input.role_mappings.is_some(),
            "Requesting GDAP invite"
        );
        Ok(self.api.generate_invite(&token, &input).await?)
    }
}
