//! Identity provider adapters.

mod oauth2_provider;

pub use oauth2_provider::OAuth2Provider;
