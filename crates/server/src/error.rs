//! HTTP error responses for the proxy endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gdap_portal_application::ApplicationError;
use gdap_portal_domain::ErrorEnvelope;
use tracing::error;

/// Label used when the template listing fails.
pub const TEMPLATES_FAILED: &str = "Failed to fetch templates";

/// Label used when invite generation fails.
pub const INVITE_FAILED: &str = "Invite generation failed";

/// A failed proxy call.
///
/// Always rendered as 500 with `{"error": <label>, "details": <message>}`,
/// whatever the underlying cause.
#[derive(Debug)]
pub struct ApiError {
    label: &'static str,
    source: ApplicationError,
}

impl ApiError {
    /// Wraps an application error under an operation label.
    #[must_use]
    pub const fn new(label: &'static str, source: ApplicationError) -> Self {
        Self { label, source }
    }

    /// Returns a closure wrapping errors under the given label.
    pub fn labelled(label: &'static str) -> impl Fn(ApplicationError) -> Self {
        move |source| Self::new(label, source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.source, "{}", self.label);
        let envelope = ErrorEnvelope::new(self.label, &self.source);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}
