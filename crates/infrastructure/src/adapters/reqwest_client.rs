//! Management API client implementation using reqwest.
//!
//! This adapter implements the `ManagementApi` port. Every call carries the
//! caller's bearer token and returns the parsed JSON body untouched.

use async_trait::async_trait;
use gdap_portal_application::ports::ManagementApi;
use gdap_portal_domain::{InviteRequest, UpstreamError, bearer_header};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

/// Role template listing endpoint, relative to the API base.
const ROLE_TEMPLATE_PATH: &str = "/api/ExecGDAPRoleTemplate";

/// Invite generation endpoint, relative to the API base.
const INVITE_PATH: &str = "/api/ExecGDAPInvite";

/// Management API client backed by `reqwest::Client`.
pub struct ReqwestManagementClient {
    client: Client,
    base_url: Url,
}

impl ReqwestManagementClient {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Builds an endpoint URL, keeping any path prefix of the base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    fn authorized(builder: RequestBuilder, bearer_token: &str) -> RequestBuilder {
        builder
            .header(reqwest::header::AUTHORIZATION, bearer_header(bearer_token))
            .header(reqwest::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
    }

    /// Sends the request and parses a successful JSON answer.
    async fn relay(builder: RequestBuilder) -> Result<Value, UpstreamError> {
        let response = builder.send().await.map_err(Self::map_error)?;
        let response = Self::check_status(response)?;

        let bytes = response.bytes().await.map_err(Self::map_error)?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::MalformedResponse {
            message: e.to_string(),
        })
    }

    fn check_status(response: Response) -> Result<Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(UpstreamError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }

    fn map_error(error: reqwest::Error) -> UpstreamError {
        UpstreamError::Network {
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl ManagementApi for ReqwestManagementClient {
    async fn list_role_templates(&self, bearer_token: &str) -> Result<Value, UpstreamError> {
        let builder = self.client.get(self.endpoint(ROLE_TEMPLATE_PATH));
        Self::relay(Self::authorized(builder, bearer_token)).await
    }

    async fn generate_invite(
        &self,
        bearer_token: &str,
        request: &InviteRequest,
    ) -> Result<Value, UpstreamError> {
        let builder = self.client.post(self.endpoint(INVITE_PATH)).json(request);
        Self::relay(Self::authorized(builder, bearer_token)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_for(server: &ServerGuard) -> ReqwestManagementClient {
        ReqwestManagementClient::new(Url::parse(&server.url()).unwrap())
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client =
            ReqwestManagementClient::new(Url::parse("https://cipp.example.com/tenant-a/").unwrap());
        assert_eq!(
            client.endpoint(ROLE_TEMPLATE_PATH),
            "https://cipp.example.com/tenant-a/api/ExecGDAPRoleTemplate"
        );

        let client = ReqwestManagementClient::new(Url::parse("https://cipp.example.com").unwrap());
        assert_eq!(
            client.endpoint(INVITE_PATH),
            "https://cipp.example.com/api/ExecGDAPInvite"
        );
    }

    #[tokio::test]
    async fn test_list_role_templates_sends_bearer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/ExecGDAPRoleTemplate")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Results":[{"TemplateId":"t1","RoleMappings":[]}]}"#)
            .create_async()
            .await;

        let value = client_for(&server).list_role_templates("tok").await.unwrap();

        assert_eq!(
            value,
            json!({"Results": [{"TemplateId": "t1", "RoleMappings": []}]})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_invite_posts_role_mappings() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/ExecGDAPInvite")
            .match_header("authorization", "Bearer tok")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(
                json!({"roleMappings": [{"RoleName": "Global Admin"}]}),
            ))
            .with_status(200)
            .with_body(r#"{"Invite":{"InviteUrl":"https://x"},"Message":"ok"}"#)
            .create_async()
            .await;

        let request = InviteRequest::new(json!([{"RoleName": "Global Admin"}]));
        let value = client_for(&server)
            .generate_invite("tok", &request)
            .await
            .unwrap();

        assert_eq!(value, json!({"Invite": {"InviteUrl": "https://x"}, "Message": "ok"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/ExecGDAPRoleTemplate")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let err = client_for(&server)
            .list_role_templates("tok")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            UpstreamError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/ExecGDAPRoleTemplate")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .list_role_templates("tok")
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::MalformedResponse { .. }));
    }
}
