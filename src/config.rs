//! Client configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://swsut62sse.execute-api.ap-south-1.amazonaws.com/prod";
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://tzab40im77.execute-api.ap-south-1.amazonaws.com/prod";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const STORAGE_FILE_NAME: &str = "animecards-storage.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyUrl { var: &'static str },
    #[error("invalid {var}: {value:?} (expected a positive number of seconds)")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub auth_base_url: String,
    pub content_base_url: String,
    pub request_timeout: Duration,
    pub storage_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_owned(),
            content_base_url: DEFAULT_CONTENT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            storage_path: default_storage_path(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `ANIMECARDS_AUTH_BASE_URL`: token service base URL
    /// - `ANIMECARDS_CONTENT_BASE_URL`: content service base URL
    /// - `ANIMECARDS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `ANIMECARDS_STORAGE_PATH`: session file, default under the user data dir
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a URL is blank or the timeout is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_base_url = parse_url(
            "ANIMECARDS_AUTH_BASE_URL",
            lookup("ANIMECARDS_AUTH_BASE_URL"),
            DEFAULT_AUTH_BASE_URL,
        )?;
        let content_base_url = parse_url(
            "ANIMECARDS_CONTENT_BASE_URL",
            lookup("ANIMECARDS_CONTENT_BASE_URL"),
            DEFAULT_CONTENT_BASE_URL,
        )?;
        let request_timeout = parse_timeout(
            "ANIMECARDS_REQUEST_TIMEOUT_SECS",
            lookup("ANIMECARDS_REQUEST_TIMEOUT_SECS"),
        )?;
        let storage_path = lookup("ANIMECARDS_STORAGE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_storage_path, PathBuf::from);

        Ok(Self { auth_base_url, content_base_url, request_timeout, storage_path })
    }
}

/// Trim a base URL so endpoint paths can be appended with a leading `/`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_url(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default.to_owned());
    };
    let url = normalize_base_url(&raw);
    if url.is_empty() {
        return Err(ConfigError::EmptyUrl { var });
    }
    Ok(url)
}

fn parse_timeout(var: &'static str, raw: Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { var, value: raw }),
    }
}

fn default_storage_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(STORAGE_FILE_NAME),
        |dir| dir.join("animecards").join("storage.json"),
    )
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
