//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACTIVITIES_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("ACTIVITIES_API_URL must be an http(s) URL, got '{0}'")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the activities API, without trailing `/`.
    pub api_base_url: String,
    pub upstream_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACTIVITIES_API_URL`: default `http://127.0.0.1:8000`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port or `ACTIVITIES_API_URL`
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_base_url = parse_api_url(std::env::var("ACTIVITIES_API_URL").ok().as_deref())?;
        let upstream_timeout_secs = env_parse_u64("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS);
        Ok(Self { port, api_base_url, upstream_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_ACTIVITIES_API_URL).trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(url.to_owned()));
    }
    Ok(url.to_owned())
}
