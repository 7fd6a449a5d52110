// Configuration module for csearch
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum search pattern length in bytes (CSEARCH_PATTERN_MAX_LENGTH)
    pub pattern_max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern_max_length: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("CSEARCH_PATTERN_MAX_LENGTH") {
            if let Ok(parsed) = val.parse() {
                config.pattern_max_length = parsed;
            } else {
                warn!(
                    value = %val,
                    default = config.pattern_max_length,
                    "invalid CSEARCH_PATTERN_MAX_LENGTH, using default"
                );
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}
