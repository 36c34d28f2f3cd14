//! Server configuration
//!
//! Values come from the environment; command-line flags may override them
//! afterwards.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the SQLite database file
pub const DB_PATH_ENV: &str = "BOOKS_DB_PATH";
/// Environment variable holding the listen address
pub const ADDR_ENV: &str = "BOOKS_ADDR";
/// Environment variable with allowed CORS origins (`*` or comma-separated)
pub const CORS_ORIGINS_ENV: &str = "BOOKS_CORS_ORIGINS";

pub const DEFAULT_DB_PATH: &str = "./books.db";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Address the listener binds to
    pub addr: SocketAddr,

    /// Raw CORS origin setting, `None` for localhost defaults
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `BOOKS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup(ADDR_ENV) {
            config.addr = parse_addr(&addr)?;
        }
        config.cors_origins = lookup(CORS_ORIGINS_ENV);

        Ok(config)
    }
}

/// Parse a listen address such as `127.0.0.1:8080`
pub fn parse_addr(addr: &str) -> Result<SocketAddr> {
    addr.trim()
        .parse()
        .with_context(|| format!("Invalid listen address: {}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("./books.db"));
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, "/tmp/catalog.db"),
            (ADDR_ENV, "127.0.0.1:9000"),
            (CORS_ORIGINS_ENV, "*"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/catalog.db"));
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.cors_origins.as_deref(), Some("*"));
    }

    #[test]
    fn test_invalid_addr() {
        assert!(ServerConfig::from_lookup(lookup(&[(ADDR_ENV, "not-an-addr")])).is_err());
    }
}
