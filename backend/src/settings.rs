//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `JEEP_SALES_*` environment variables, and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address used when `bind_address` is not configured.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddress { value: String, message: String },
}

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JEEP_SALES")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:8080`.
    pub bind_address: Option<String>,
    /// PostgreSQL URL. Without one the reference catalogue is served from
    /// memory.
    pub database_url: Option<String>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Parsed listen address, falling back to [`DEFAULT_BIND_ADDRESS`].
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddress {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
