//! GDAP Portal Domain - Core types
//!
//! This crate defines the domain model for the GDAP invite portal.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod invite;
pub mod settings;

pub use auth::{
    AuthError, CachedToken, ClientCredentials, DEFAULT_AUTHORITY_URL, EXPIRY_MARGIN_SECS,
    TokenGrant, bearer_header,
};
pub use error::UpstreamError;
pub use invite::{ErrorEnvelope, InviteRequest};
pub use settings::Branding;
