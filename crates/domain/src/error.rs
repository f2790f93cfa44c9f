//! Management API error types

use thiserror::Error;

/// Errors raised while calling the upstream management API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The management API answered with a non-success status.
    #[error("management API error: {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },
    /// The request could not be sent or its body could not be read.
    #[error("management API request failed: {message}")]
    Network {
        /// Error description.
        message: String,
    },
    /// The management API answered with a body that is not JSON.
    #[error("management API returned invalid JSON: {message}")]
    MalformedResponse {
        /// Error description.
        message: String,
    },
}
