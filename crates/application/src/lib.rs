//! GDAP Portal Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (clock, identity provider, management API)
//! - The bearer token cache and acquirer
//! - Use case orchestration for the two proxied calls
//! - Application-level error handling

pub mod auth;
pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod fakes;

pub use auth::{TokenAcquirer, TokenCache};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, ManagementApi, TokenEndpoint};
pub use use_cases::{GenerateInvite, ListRoleTemplates};
