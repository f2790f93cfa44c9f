//! Router construction.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::handlers;
use crate::state::AppState;

/// Request id header set on every request and echoed on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates time-ordered request ids.
#[derive(Debug, Clone, Copy, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Builds the service router.
///
/// Only `GET /`, `GET /api/templates` and `POST /api/generate-invite` are
/// served. Every other path, and every other method on those paths, is
/// answered with 404. `get` would also serve HEAD, so HEAD is routed to
/// the 404 handler explicitly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index)
                .head(handlers::not_found)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/templates",
            get(handlers::list_templates)
                .head(handlers::not_found)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/generate-invite",
            post(handlers::generate_invite).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default();
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
