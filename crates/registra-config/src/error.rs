//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while loading service settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// HTTP port value was not a valid port number.
    #[error("invalid HTTP port")]
    InvalidPort {
        /// Port payload provided by the environment.
        value: String,
    },
    /// Bind address value was not a valid IP address.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// Bind address payload provided by the environment.
        value: String,
    },
    /// A name-valued setting was empty.
    #[error("empty value for {name}")]
    EmptyValue {
        /// Environment variable that carried the empty value.
        name: &'static str,
    },
}
