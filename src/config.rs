//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for writes that pass a TTL of zero
    pub default_ttl: u64,
    /// Keys to pre-declare at construction (stale until first written)
    pub initial_keys: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `INITIAL_KEYS` - Comma-separated keys to pre-declare (default: none)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            initial_keys: env::var("INITIAL_KEYS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|k| !k.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            initial_keys: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 300);
        assert!(config.initial_keys.is_empty());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DEFAULT_TTL");
        env::remove_var("INITIAL_KEYS");

        let config = Config::from_env();
        assert_eq!(config.default_ttl, 300);
        assert!(config.initial_keys.is_empty());
    }

    #[test]
    fn test_initial_keys_parsing() {
        let keys: Vec<String> = "a, b,,c"
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
