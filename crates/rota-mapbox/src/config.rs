//! Provider configuration from environment.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MAPBOX_ACCESS_TOKEN is not set")]
    MissingAccessToken,
}

#[derive(Debug, Clone)]
pub struct MapboxConfig {
    pub access_token: String,
    pub base_url: String,
    /// ISO 3166 alpha-2 country filter for geocoding
    pub country: String,
    /// Language for suggestion labels and maneuver text
    pub language: String,
    pub suggestion_limit: u8,
    pub http_timeout: Duration,
}

impl MapboxConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: "BR".to_string(),
            language: "pt".to_string(),
            suggestion_limit: 5,
            http_timeout: Duration::from_secs(10),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("MAPBOX_ACCESS_TOKEN")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        let mut config = Self::new(token);
        if let Some(url) = lookup("MAPBOX_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(country) = lookup("ROTA_COUNTRY").filter(|s| !s.trim().is_empty()) {
            config.country = country.trim().to_string();
        }
        if let Some(language) = lookup("ROTA_LANGUAGE").filter(|s| !s.trim().is_empty()) {
            config.language = language.trim().to_string();
        }
        config.suggestion_limit = lookup("ROTA_SUGGESTION_LIMIT")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|&limit| limit > 0)
            .unwrap_or(config.suggestion_limit);
        config.http_timeout = lookup("ROTA_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(config.http_timeout);

        Ok(config)
    }
}
