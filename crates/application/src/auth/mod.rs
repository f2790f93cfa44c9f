//! Bearer token management for upstream calls.
//!
//! This module provides:
//! - A single-slot in-memory token cache with expiry tracking
//! - The acquirer that refreshes it through the client-credentials grant

mod token_acquirer;
mod token_cache;

pub use token_acquirer::TokenAcquirer;
pub use token_cache::TokenCache;
