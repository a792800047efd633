//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Errors produced while reading configuration at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),

    /// `BACKEND_URL` is not an absolute http(s) URL.
    #[error("invalid BACKEND_URL {0:?}: expected an http:// or https:// URL")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port on all interfaces.
    pub port: u16,
    /// Base URL of the knowledge-base/diagnosis backend, without trailing `/`.
    pub backend_url: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:8000`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        Ok(Self { port, backend_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_BACKEND_URL.to_owned()),
        Some(value) => value,
    };
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    let trimmed = value.trim_end_matches('/');
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
