//! Server configuration
//!
//! Values come from `DASHBOARD_*` environment variables layered over
//! built-in defaults.

use crate::storage::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "DASHBOARD";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub page_size: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("page_size", DEFAULT_PAGE_SIZE as i64)?
            .set_default("log_format", "json")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_format: LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_env(env(&[])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.page_size, 2);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::from_env(env(&[
            ("DASHBOARD_BIND_ADDRESS", "127.0.0.1:9000"),
            ("DASHBOARD_PAGE_SIZE", "5"),
            ("DASHBOARD_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_page_size() {
        let result = ServerConfig::from_env(env(&[("DASHBOARD_PAGE_SIZE", "many")]));
        assert!(result.is_err());
    }
}
