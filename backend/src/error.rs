//! Error type shared by the auth and storage clients.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by backend client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// A required configuration key is absent.
    #[error("missing config: {0} not set")]
    MissingConfig(&'static str),

    /// A configuration value could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl BackendError {
    /// Provider-facing message without the variant prefix, for notifications.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Request(message) | Self::Api { message, .. } | Self::Parse(message) => message.clone(),
            Self::InvalidConfig(message) | Self::HttpClientBuild(message) => message.clone(),
            Self::MissingConfig(_) => self.to_string(),
        }
    }

    /// Whether the backend rejected the credentials rather than failing to answer.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Api { status: 400 | 401 | 403, .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
