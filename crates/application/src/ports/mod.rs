//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod management_api;
mod token_endpoint;

pub use clock::Clock;
pub use management_api::ManagementApi;
pub use token_endpoint::TokenEndpoint;
