//! Centralized configuration (environment variables + defaults).
//!
//! Values are read once at startup into [`AppConfig`] and handed to the constructors that need
//! them; nothing else in the crate reads the environment.

use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a valid {expected} (got {value:?})")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://drivers.db`.
    pub url: String,
    pub max_connections: u32,
}

/// The single shared credential pair every request must present.
#[derive(Clone)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub basic_auth: BasicAuthCredentials,
    pub listen_addr: String,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    expected: "positive integer",
                    value: v,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections,
            },
            basic_auth: BasicAuthCredentials {
                username: required("BASIC_AUTH_USERNAME")?,
                password: required("BASIC_AUTH_PASSWORD")?,
            },
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }

    /// Convenience for tests and tooling that already hold the values in a map.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let cfg = AppConfig::from_map(&vars(&[
            ("DATABASE_URL", "sqlite://drivers.db"),
            ("BASIC_AUTH_USERNAME", "admin"),
            ("BASIC_AUTH_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(cfg.database.url, "sqlite://drivers.db");
        assert_eq!(cfg.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.basic_auth.username, "admin");
    }

    #[test]
    fn test_missing_required_value() {
        let err = AppConfig::from_map(&vars(&[
            ("DATABASE_URL", "sqlite://drivers.db"),
            ("BASIC_AUTH_USERNAME", "admin"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("BASIC_AUTH_PASSWORD"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = AppConfig::from_map(&vars(&[
            ("DATABASE_URL", "  "),
            ("BASIC_AUTH_USERNAME", "admin"),
            ("BASIC_AUTH_PASSWORD", "secret"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_max_connections() {
        let err = AppConfig::from_map(&vars(&[
            ("DATABASE_URL", "sqlite://drivers.db"),
            ("DATABASE_MAX_CONNECTIONS", "zero"),
            ("BASIC_AUTH_USERNAME", "admin"),
            ("BASIC_AUTH_PASSWORD", "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                ..
            }
        ));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let creds = BasicAuthCredentials {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        let dbg = format!("{:?}", creds);
        assert!(!dbg.contains("hunter2"));
    }
}
