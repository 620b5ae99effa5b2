//! Client configuration parsed from environment variables.

use crate::router::guard::GuardPolicy;

pub const DEFAULT_API_HOST: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid LEAVE_API_HOST `{0}`: expected an http(s) URL")]
    ApiHost(String),
    #[error("unknown LEAVE_GUARD_POLICY `{0}` (expected `cached` or `revalidate`)")]
    GuardPolicy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without trailing slash, e.g. `http://localhost:8080`.
    pub api_host: String,
    pub timeouts: Timeouts,
    pub guard_policy: GuardPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_host: DEFAULT_API_HOST.to_owned(), timeouts: Timeouts::default(), guard_policy: GuardPolicy::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `LEAVE_API_HOST`: backend origin, default `http://localhost:8080`
    /// - `LEAVE_REQUEST_TIMEOUT_SECS`: default 10
    /// - `LEAVE_CONNECT_TIMEOUT_SECS`: default 5
    /// - `LEAVE_GUARD_POLICY`: `cached` (default) or `revalidate`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host or guard policy is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_host = parse_api_host(std::env::var("LEAVE_API_HOST").ok().as_deref())?;
        let timeouts = Timeouts {
            request_secs: env_parse_u64("LEAVE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LEAVE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let guard_policy = parse_guard_policy(std::env::var("LEAVE_GUARD_POLICY").ok().as_deref())?;
        Ok(Self { api_host, timeouts, guard_policy })
    }

    /// Replace the backend origin, keeping other settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ApiHost`] if `host` is not an http(s) URL.
    pub fn with_api_host(mut self, host: &str) -> Result<Self, ConfigError> {
        self.api_host = parse_api_host(Some(host))?;
        Ok(self)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_api_host(raw: Option<&str>) -> Result<String, ConfigError> {
    let host = raw.map_or(DEFAULT_API_HOST, str::trim);
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::ApiHost(host.to_owned()));
    }
    Ok(host.trim_end_matches('/').to_owned())
}

pub(crate) fn parse_guard_policy(raw: Option<&str>) -> Result<GuardPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("cached") {
        "cached" => Ok(GuardPolicy::Cached),
        "revalidate" => Ok(GuardPolicy::Revalidate),
        other => Err(ConfigError::GuardPolicy(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
