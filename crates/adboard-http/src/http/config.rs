//! Client configuration

use adboard::AdboardError;
use std::env;
use std::time::Duration;

pub const BASE_URL_ENV: &str = "ADBOARD_BASE_URL";
pub const TIMEOUT_ENV: &str = "ADBOARD_TIMEOUT_SECS";
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// No timeout unless configured.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, AdboardError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, AdboardError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup(BASE_URL_ENV) {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => Some(parse_timeout_secs(&raw)?),
            None => None,
        };
        Ok(Self { base_url, timeout })
    }

    /// Applies command-line values on top of this configuration.
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AdboardError> {
        if let Some(url) = base_url {
            self.base_url = normalize_base_url(url)?;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }
}

pub fn parse_timeout_secs(raw: &str) -> Result<Duration, AdboardError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AdboardError::invalid_config(TIMEOUT_ENV, format!("'{raw}': {e}")))?;
    Ok(Duration::from_secs(secs))
}

fn normalize_base_url(raw: &str) -> Result<String, AdboardError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AdboardError::invalid_config(BASE_URL_ENV, "base URL is empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(AdboardError::invalid_config(
            BASE_URL_ENV,
            format!("'{trimmed}' must start with http:// or https://"),
        ));
    }
    Ok(trimmed.to_string())
}
