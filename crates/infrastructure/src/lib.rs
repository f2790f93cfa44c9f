//! GDAP Portal Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod auth;

pub use adapters::{ReqwestManagementClient, SystemClock};
pub use auth::OAuth2Provider;
