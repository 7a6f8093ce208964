//! Backend connection configuration.
//!
//! Values come from a key lookup so the same parser serves the host process
//! (`std::env`) and the browser bundle (keys baked in at compile time).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::BackendError;

pub const DEFAULT_BUCKET: &str = "images";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const URL_KEY: &str = "BACKEND_URL";
pub const ANON_KEY_KEY: &str = "BACKEND_ANON_KEY";
pub const BUCKET_KEY: &str = "STORAGE_BUCKET";
pub const REQUEST_TIMEOUT_KEY: &str = "BACKEND_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_KEY: &str = "BACKEND_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public API key sent as `apikey` on every request.
    pub anon_key: String,
    pub bucket: String,
    pub timeouts: Timeouts,
}

impl BackendConfig {
    /// Build typed config from a key lookup (process env, baked build env).
    ///
    /// Required:
    /// - `BACKEND_URL`
    /// - `BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `STORAGE_BUCKET`: default `images`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is missing or a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BackendError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, URL_KEY)?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BackendError::InvalidConfig(format!("{URL_KEY} must be an http(s) URL: {url}")));
        }
        let url = url.trim_end_matches('/').to_owned();
        let anon_key = required(&lookup, ANON_KEY_KEY)?;

        let bucket = lookup(BUCKET_KEY)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET.to_owned());
        if bucket.contains('/') {
            return Err(BackendError::InvalidConfig(format!("{BUCKET_KEY} must not contain '/': {bucket}")));
        }

        let timeouts = Timeouts {
            request_secs: parse_secs(&lookup, REQUEST_TIMEOUT_KEY, DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_secs(&lookup, CONNECT_TIMEOUT_KEY, DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { url, anon_key, bucket, timeouts })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, BackendError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(BackendError::MissingConfig(key))
}

/// Positive whole seconds; a blank value falls back to `default`.
fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<u64, BackendError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(BackendError::InvalidConfig(format!("{key} must be greater than zero"))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(BackendError::InvalidConfig(format!("{key} must be a whole number of seconds: {raw}"))),
    }
}
