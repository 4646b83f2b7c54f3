use std::env;

use tracing::info;

/// Default number of organic results requested per search.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub serper_api_key: String,
    pub result_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            serper_api_key: required_env("SERPER_API_KEY"),
            result_limit: env::var("SEARCH_RESULT_LIMIT")
                .ok()
                .map(|v| v.parse().expect("SEARCH_RESULT_LIMIT must be a number"))
                .unwrap_or(DEFAULT_RESULT_LIMIT),
        }
    }

    /// Log the loaded configuration without exposing the API key.
    pub fn log_redacted(&self) {
        info!(
            serper_api_key = if self.serper_api_key.is_empty() { "missing" } else { "***" },
            result_limit = self.result_limit,
            "Config loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
