//! Daemon configuration from environment variables
//!
//! | Variable               | Default       |
//! |------------------------|---------------|
//! | `RESPMODEL_HOST`       | `127.0.0.1`   |
//! | `RESPMODEL_PORT`       | `8000`        |
//! | `RESPMODEL_LOG_FORMAT` | `pretty`      |
//! | `RESPMODEL_SECRETS`    | `placeholder` |

use respmodel_api_http::HttpServerConfig;
use respmodel_core::error::{AppError, Result};

pub const ENV_HOST: &str = "RESPMODEL_HOST";
pub const ENV_PORT: &str = "RESPMODEL_PORT";
pub const ENV_LOG_FORMAT: &str = "RESPMODEL_LOG_FORMAT";
pub const ENV_SECRETS: &str = "RESPMODEL_SECRETS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    Pretty,
    /// Production: JSON structured logging
    Json,
}

/// Source of `internal_id` / `api_key` for new records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretMode {
    Placeholder,
    Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    pub http: HttpServerConfig,
    pub log_format: LogFormat,
    pub secrets: SecretMode,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = HttpServerConfig::default();

        let host = lookup(ENV_HOST).unwrap_or(defaults.host);
        // Unparseable port falls back to the default
        let port = lookup(ENV_PORT)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let log_format = match lookup(ENV_LOG_FORMAT).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let secrets = match lookup(ENV_SECRETS).as_deref() {
            None | Some("placeholder") => SecretMode::Placeholder,
            Some("uuid") => SecretMode::Uuid,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{} must be 'placeholder' or 'uuid', got '{}'",
                    ENV_SECRETS, other
                )))
            }
        };

        Ok(Self {
            http: HttpServerConfig { host, port },
            log_format,
            secrets,
        })
    }
}
