//! List role templates use case.

use std::sync::Arc;

use serde_json::Value;

use crate::ApplicationResult;
use crate::auth::TokenAcquirer;
use crate::ports::ManagementApi;

/// Use case relaying the management API's GDAP role template list.
pub struct ListRoleTemplates {
    tokens: Arc<TokenAcquirer>,
    api: Arc<dyn ManagementApi>,
}

impl ListRoleTemplates {
    /// Creates a new `ListRoleTemplates` use case.
    #[must_use]
    pub fn new(tokens: Arc<TokenAcquirer>, api: Arc<dyn ManagementApi>) -> Self {
        Self { tokens, api }
    }

    /// Fetches the role templates with a cached or freshly acquired token.
    ///
    /// # Errors
    /// - Returns `ApplicationError::Auth` if no token could be obtained
    /// - Returns `ApplicationError::Upstream` if the management API call fails
    pub async fn execute(&self) -> ApplicationResult<Value> {
        let token = self.tokens.get_token().await?;
        Ok(self.api.list_role_templates(&token).await?)
    }
}
