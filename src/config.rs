//! Host configuration and startup errors.
//!
//! The host only needs its listen port. Backend settings are read by the
//! `backend` crate from the same environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const PORT_KEY: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("leptos setup failed: {0}")]
    Leptos(String),

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read host settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read host settings through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_KEY).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::InvalidConfig { key: PORT_KEY, value: raw })?,
        };
        Ok(Self { port })
    }
}
