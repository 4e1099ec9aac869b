use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::config::helpers::{optional_env, parse_optional_env};
use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
/// 50 MiB, enough for a base64 selfie inside JSON.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
    /// Built web client to serve at `/`, with an `index.html` fallback.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let host = optional_env("HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        host.parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "HOST".to_string(),
                message: format!("'{host}' is not an IP address: {e}"),
            })?;

        let port = parse_optional_env("PORT", DEFAULT_PORT)?;

        let max_body_bytes = parse_optional_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_BODY_BYTES".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let static_dir = optional_env("STATIC_DIR")?.map(PathBuf::from);

        Ok(Self {
            host,
            port,
            max_body_bytes,
            static_dir,
        })
    }

    /// Listen address. Host is validated in `resolve`, but CLI overrides are not.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            key: "HOST".to_string(),
            message: format!("'{}' is not an IP address: {e}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
