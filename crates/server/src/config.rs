//! Environment-driven service configuration.
//!
//! Variable names match the ones the portal has always been deployed with
//! (`CIPP_API_CLIENT_ID`, `APP_NAME`, ...). Unset branding falls back to
//! defaults; unset credentials abort startup.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use config::{Config, Environment};
use gdap_portal_domain::settings::{DEFAULT_APP_NAME, DEFAULT_THEME_COLOR};
use gdap_portal_domain::{Branding, ClientCredentials, DEFAULT_AUTHORITY_URL};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required variable is set but empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A URL variable does not parse.
    #[error("invalid {name}: {source}")]
    InvalidUrl {
        /// Variable name.
        name: &'static str,
        /// Parse failure.
        source: url::ParseError,
    },

    /// The bind host is not an IP address.
    #[error("invalid PORTAL_HOST {host:?}: {source}")]
    InvalidHost {
        /// Configured host.
        host: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
}

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Application (client) id used for the client-credentials grant.
    #[serde(rename = "cipp_api_client_id", alias = "CIPP_API_CLIENT_ID")]
    pub client_id: String,
    /// Client secret used for the client-credentials grant.
    #[serde(rename = "cipp_api_secret", alias = "CIPP_API_SECRET")]
    pub client_secret: String,
    /// Tenant the application is registered in.
    #[serde(rename = "cipp_tenant_id", alias = "CIPP_TENANT_ID")]
    pub tenant_id: String,
    /// Base URL of the management API.
    #[serde(rename = "cipp_api_url", alias = "CIPP_API_URL")]
    pub api_url: Url,
    /// Identity provider authority the token endpoint lives under.
    #[serde(
        rename = "token_authority_url",
        alias = "TOKEN_AUTHORITY_URL",
        default = "default_authority"
    )]
    pub authority_url: String,
    /// Page title and heading.
    #[serde(rename = "app_name", alias = "APP_NAME", default = "default_app_name")]
    pub app_name: String,
    /// Logo and favicon URL.
    #[serde(rename = "logo_url", alias = "LOGO_URL", default)]
    pub logo_url: String,
    /// Accent color of the page.
    #[serde(
        rename = "theme_primary_color",
        alias = "THEME_PRIMARY_COLOR",
        default = "default_theme_color"
    )]
    pub theme_color: String,
    /// Template id the page must preselect and lock.
    #[serde(
        rename = "cipp_role_template_lock",
        alias = "CIPP_ROLE_TEMPLATE_LOCK",
        default
    )]
    pub role_template_lock: Option<String>,
    /// Address to bind.
    #[serde(rename = "portal_host", alias = "PORTAL_HOST", default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(rename = "portal_port", alias = "PORTAL_PORT", default = "default_port")]
    pub port: u16,
}

fn default_authority() -> String {
    DEFAULT_AUTHORITY_URL.to_string()
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_theme_color() -> String {
    DEFAULT_THEME_COLOR.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8787
}

impl PortalConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or empty, or a URL
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    /// Loads the configuration from an explicit variable map.
    ///
    /// # Errors
    /// Same as [`PortalConfig::from_env`].
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::default().source(Some(vars.into_iter().collect())))
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(environment.ignore_empty(true))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("CIPP_API_CLIENT_ID", &self.client_id),
            ("CIPP_API_SECRET", &self.client_secret),
            ("CIPP_TENANT_ID", &self.tenant_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }
        Url::parse(&self.authority_url).map_err(|source| ConfigError::InvalidUrl {
            name: "TOKEN_AUTHORITY_URL",
            source,
        })?;
        Ok(())
    }

    /// Credentials for the client-credentials grant.
    #[must_use]
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials::new(&self.tenant_id, &self.client_id, &self.client_secret)
    }

    /// Values substituted into the page.
    #[must_use]
    pub fn branding(&self) -> Branding {
        Branding {
            app_name: self.app_name.clone(),
            logo_url: self.logo_url.clone(),
            theme_color: self.theme_color.clone(),
            locked_template: None,
        }
        .with_locked_template(self.role_template_lock.clone())
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidHost` if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
