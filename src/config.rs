use std::time::Duration;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the translation service
    pub api_url: String,

    /// Upper bound on each translate request
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Neither variable is set in the test environment
        let config = Config::from_env().expect("Should succeed");
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
