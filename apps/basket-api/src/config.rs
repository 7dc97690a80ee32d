//! Basket API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

/// Which [`basket_db::BasketStore`] backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// SQLite file (or `:memory:`) through sqlx.
    Sqlite,
    /// Process-local map; contents are lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::InvalidValue("BASKET_STORE".to_string())),
        }
    }
}

/// Basket API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    pub bind_addr: IpAddr,

    /// HTTP server port
    pub http_port: u16,

    /// Store backend
    pub store: StoreKind,

    /// SQLite database path (`:memory:` allowed)
    pub database_path: PathBuf,

    /// SQLite pool size
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            http_port: 8080,
            store: StoreKind::Sqlite,
            database_path: PathBuf::from("basket.db"),
            db_max_connections: 5,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: parse_var(&lookup, "BASKET_BIND_ADDR", defaults.bind_addr)?,
            http_port: parse_var(&lookup, "BASKET_HTTP_PORT", defaults.http_port)?,
            store: parse_var(&lookup, "BASKET_STORE", defaults.store)?,
            database_path: lookup("BASKET_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            db_max_connections: parse_var(
                &lookup,
                "BASKET_DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            )?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "BASKET_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Socket address for the HTTP listener.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.database_path, PathBuf::from("basket.db"));
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("BASKET_BIND_ADDR", "127.0.0.1"),
            ("BASKET_HTTP_PORT", "9090"),
            ("BASKET_STORE", "Memory"),
            ("BASKET_DB_PATH", ":memory:"),
            ("BASKET_DB_MAX_CONNECTIONS", "2"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.database_path, PathBuf::from(":memory:"));
        assert_eq!(config.db_max_connections, 2);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = load_from(&[("BASKET_HTTP_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BASKET_HTTP_PORT");

        let err = load_from(&[("BASKET_STORE", "postgres")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BASKET_STORE");

        let err = load_from(&[("BASKET_DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BASKET_DB_MAX_CONNECTIONS");
    }
}
