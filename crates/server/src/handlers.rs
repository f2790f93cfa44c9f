//! Route handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use gdap_portal_application::ApplicationError;
use gdap_portal_domain::InviteRequest;
use serde_json::Value;

use crate::error::{ApiError, INVITE_FAILED, TEMPLATES_FAILED};
use crate::state::AppState;

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page())
}

/// `GET /api/templates`
pub async fn list_templates(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .templates()
        .execute()
        .await
        .map(Json)
        .map_err(ApiError::labelled(TEMPLATES_FAILED))
}

/// `POST /api/generate-invite`
///
/// The body is parsed here rather than with the `Json` extractor so that a
/// malformed body gets the same error envelope as an upstream failure.
pub async fn generate_invite(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request = InviteRequest::from_json_slice(&body)
        .map_err(|e| ApplicationError::InvalidRequest(e.to_string()))
        .map_err(ApiError::labelled(INVITE_FAILED))?;

    state
        .invites()
        .execute(request)
        .await
        .map(Json)
        .map_err(ApiError::labelled(INVITE_FAILED))
}

/// Any other method or path.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
