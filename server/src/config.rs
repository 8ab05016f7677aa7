//! Configuration management for the ticklist server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Lookup is injected as a closure so the parsing logic is testable without
//! mutating the process environment.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing-file configuration.
    pub storage: StorageConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Backing-file configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the JSON file holding the to-do list.
    pub file: PathBuf,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `TICKLIST_FILE`: backing file path (default `todos.json`)
    /// - `HOST`: bind host (default `127.0.0.1`)
    /// - `PORT`: bind port (default `8080`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage: StorageConfig {
                file: get("TICKLIST_FILE")
                    .map_or_else(|| PathBuf::from("todos.json"), PathBuf::from),
            },
            server: ServerConfig {
                host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: get("PORT").and_then(|s| s.parse().ok()).unwrap_or(8080),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.storage.file, PathBuf::from("todos.json"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(|key| match key {
            "TICKLIST_FILE" => Some("/data/list.json".to_string()),
            "HOST" => Some("0.0.0.0".to_string()),
            "PORT" => Some("3000".to_string()),
            _ => None,
        });

        assert_eq!(config.storage.file, PathBuf::from("/data/list.json"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn unparseable_port_falls_back_to_the_default() {
        let config = Config::from_lookup(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });

        assert_eq!(config.server.port, 8080);
    }
}
