//! Shared handler state.

use std::sync::Arc;

use axum::body::Bytes;
use gdap_portal_application::{
    Clock, GenerateInvite, ListRoleTemplates, ManagementApi, TokenAcquirer, TokenCache,
    TokenEndpoint,
};
use gdap_portal_domain::{Branding, ClientCredentials};
use gdap_portal_infrastructure::{OAuth2Provider, ReqwestManagementClient, SystemClock};

use crate::config::PortalConfig;
use crate::page::render_index;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    templates: Arc<ListRoleTemplates>,
    invites: Arc<GenerateInvite>,
    page: Bytes,
}

impl AppState {
    /// Wires the use cases over explicit ports.
    ///
    /// `cache` is the single process-wide token cache; both proxy routes
    /// share it through one `TokenAcquirer`.
    #[must_use]
    pub fn new(
        cache: TokenCache,
        token_endpoint: Arc<dyn TokenEndpoint>,
        management_api: Arc<dyn ManagementApi>,
        clock: Arc<dyn Clock>,
        credentials: ClientCredentials,
        branding: &Branding,
    ) -> Self {
        let tokens = Arc::new(TokenAcquirer::new(cache, token_endpoint, clock, credentials));

        Self {
            templates: Arc::new(ListRoleTemplates::new(
                tokens.clone(),
                management_api.clone(),
            )),
            invites: Arc::new(GenerateInvite::new(tokens, management_api)),
            page: Bytes::from(render_index(branding)),
        }
    }

    /// Builds the production wiring from configuration.
    #[must_use]
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(
            TokenCache::new(),
            Arc::new(OAuth2Provider::with_authority(config.authority_url.clone())),
            Arc::new(ReqwestManagementClient::new(config.api_url.clone())),
            Arc::new(SystemClock),
            config.credentials(),
            &config.branding(),
        )
    }

    /// Role template listing use case.
    #[must_use]
    pub fn templates(&self) -> &ListRoleTemplates {
        &self.templates
    }

    /// Invite generation use case.
    #[must_use]
    pub fn invites(&self) -> &GenerateInvite {
        &self.invites
    }

    /// The rendered HTML page.
    #[must_use]
    pub fn page(&self) -> Bytes {
        self.page.clone()
    }
}
