//! Authentication domain types

mod types;

pub use types::{
    AuthError, CachedToken, ClientCredentials, DEFAULT_AUTHORITY_URL, EXPIRY_MARGIN_SECS,
    TokenGrant, bearer_header,
};
