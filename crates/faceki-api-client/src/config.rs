//! Client configuration.

use serde::Deserialize;

use crate::TokenStrategy;

/// The host all the routes are relative to, unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://sdk.faceki.com";

/// The client configuration.
///
/// Transport concerns (timeouts, proxies, TLS) are configured on the [`reqwest::Client`]
/// passed to [`crate::Client::with_config`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The base URL to use for the routes.
    pub base_url: String,
    /// How access tokens are reused across calls.
    pub token_strategy: TokenStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_strategy: TokenStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://sdk.faceki.com");
        assert_eq!(config.token_strategy, TokenStrategy::PerCall);
    }

    #[test]
    fn cached_strategy_deserialization() {
        let sample_config = serde_json::json!({
            "base_url": "http://localhost:8080",
            "token_strategy": {
                "kind": "cached",
                "validity_secs": 300,
            },
        });

        let config: Config = serde_json::from_value(sample_config).unwrap();
        assert_eq!(
            config,
            Config {
                base_url: "http://localhost:8080".to_owned(),
                token_strategy: TokenStrategy::Cached {
                    validity: Duration::from_secs(300)
                },
            }
        );
    }

    #[test]
    fn per_call_strategy_deserialization() {
        let sample_config = serde_json::json!({
            "token_strategy": { "kind": "per_call" },
        });

        let config: Config = serde_json::from_value(sample_config).unwrap();
        assert_eq!(config.token_strategy, TokenStrategy::PerCall);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
