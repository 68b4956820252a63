//! Load server config from environment variables. Loading `.env` is left to the binary.

use crate::config::types::ServerConfig;
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const ENV_BODY_LIMIT: &str = "BODY_LIMIT_BYTES";

impl ServerConfig {
    /// Read config from the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let database_url = lookup(ENV_DATABASE_URL)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.database_url);
        let host = parse_or(&lookup, ENV_HOST, defaults.host)?;
        let port = parse_or(&lookup, ENV_PORT, defaults.port)?;
        let max_connections = parse_or(&lookup, ENV_MAX_CONNECTIONS, defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Zero { key: ENV_MAX_CONNECTIONS });
        }
        let body_limit_bytes = parse_or(&lookup, ENV_BODY_LIMIT, defaults.body_limit_bytes)?;
        if body_limit_bytes == 0 {
            return Err(ConfigError::Zero { key: ENV_BODY_LIMIT });
        }
        Ok(ServerConfig {
            database_url,
            host,
            port,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            trimmed
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value: raw.clone() })
        }
    }
}
