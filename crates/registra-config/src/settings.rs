//! The `Settings` model and environment loader.

use std::net::{IpAddr, SocketAddr};

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming the bind address.
pub const ENV_BIND_ADDR: &str = "REGISTRA_BIND_ADDR";
/// Environment variable naming the HTTP port.
pub const ENV_HTTP_PORT: &str = "REGISTRA_HTTP_PORT";
/// Environment variable naming the record table.
pub const ENV_TABLE: &str = "REGISTRA_TABLE";
/// Environment variable naming the email secondary index.
pub const ENV_EMAIL_INDEX: &str = "REGISTRA_EMAIL_INDEX";

const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_TABLE: &str = "students";
const DEFAULT_EMAIL_INDEX: &str = "email-index";

/// Service settings resolved at startup.
///
/// The table and index names are fixed deployment constants; requests never
/// influence them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the HTTP listener binds to.
    pub bind_addr: IpAddr,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
    /// Name of the record table.
    pub table: String,
    /// Name of the secondary index over the `email` attribute.
    pub email_index: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            http_port: DEFAULT_HTTP_PORT,
            table: DEFAULT_TABLE.to_string(),
            email_index: DEFAULT_EMAIL_INDEX.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an injected variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            settings.bind_addr = value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })?;
        }
        if let Some(value) = lookup(ENV_HTTP_PORT) {
            settings.http_port = value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?;
        }
        if let Some(value) = lookup(ENV_TABLE) {
            if value.is_empty() {
                return Err(ConfigError::EmptyValue { name: ENV_TABLE });
            }
            settings.table = value;
        }
        if let Some(value) = lookup(ENV_EMAIL_INDEX) {
            if value.is_empty() {
                return Err(ConfigError::EmptyValue {
                    name: ENV_EMAIL_INDEX,
                });
            }
            settings.email_index = value;
        }

        debug!(
            table = %settings.table,
            email_index = %settings.email_index,
            "settings resolved"
        );
        Ok(settings)
    }

    /// The socket address the HTTP listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}
