//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where and how to reach the external auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRelayConfig {
    /// Base URL without a trailing `/`.
    pub base_url: String,
    pub timeouts: RelayTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when `AUTH_SERVICE_URL` is unset; the relay answers 503.
    pub auth: Option<AuthRelayConfig>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_SERVICE_URL`: relay disabled when absent or blank
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let auth = match lookup("AUTH_SERVICE_URL").map(|raw| raw.trim().trim_end_matches('/').to_owned()) {
            Some(base_url) if !base_url.is_empty() => Some(AuthRelayConfig {
                base_url,
                timeouts: RelayTimeouts {
                    request_secs: parse_or(
                        "AUTH_REQUEST_TIMEOUT_SECS",
                        lookup("AUTH_REQUEST_TIMEOUT_SECS"),
                        DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
                    )?,
                    connect_secs: parse_or(
                        "AUTH_CONNECT_TIMEOUT_SECS",
                        lookup("AUTH_CONNECT_TIMEOUT_SECS"),
                        DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
                    )?,
                },
            }),
            _ => None,
        };

        Ok(Self { port, auth })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
