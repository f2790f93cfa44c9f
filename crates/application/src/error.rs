//! Application error types

use gdap_portal_domain::{AuthError, UpstreamError};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// The bearer token could not be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The management API call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The caller's request body could not be parsed.
    #[error("invalid request body: {0}")]
    InvalidRequest(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
