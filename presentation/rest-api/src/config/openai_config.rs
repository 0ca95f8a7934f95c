use std::time::Duration;

use super::env::{self, ConfigError};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: API key (required)
    /// - OPENAI_TIMEOUT_SECS: request timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env::required("OPENAI_API_KEY")?,
            timeout: Duration::from_secs(env::parsed_or(
                "OPENAI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
        })
    }
}
