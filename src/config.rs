use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://addis-music-backend-8e7a.onrender.com/api";

const API_URL_ENV: &str = "SONGDECK_API_URL";
const NOTIFICATION_ENV: &str = "SONGDECK_NOTIFICATION_SECS";
const TIMEOUT_ENV: &str = "SONGDECK_REQUEST_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub notification_ttl: Duration,
    /// `None` leaves requests without a client-side deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            notification_ttl: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }
        if let Some(secs) = seconds(&lookup, NOTIFICATION_ENV)? {
            config.notification_ttl = secs;
        }
        config.request_timeout = seconds(&lookup, TIMEOUT_ENV)?;

        Ok(config)
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<u64>()
        .map(|s| Some(Duration::from_secs(s)))
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.notification_ttl, Duration::from_secs(5));
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SONGDECK_API_URL", "http://localhost:3000/api"),
            ("SONGDECK_NOTIFICATION_SECS", "2"),
            ("SONGDECK_REQUEST_TIMEOUT_SECS", " 30 "),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:3000/api");
        assert_eq!(config.notification_ttl, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_url_keeps_default() {
        let config = AppConfig::from_lookup(lookup(&[("SONGDECK_API_URL", "  ")])).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = AppConfig::from_lookup(lookup(&[("SONGDECK_NOTIFICATION_SECS", "soon")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: "SONGDECK_NOTIFICATION_SECS",
                value: "soon".into()
            }
        );
    }
}
