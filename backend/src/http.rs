//! Shared HTTP plumbing: client construction, auth headers, error bodies.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::config::BackendConfig;
use crate::error::BackendError;

pub(crate) fn build_client(config: &BackendConfig) -> Result<reqwest::Client, BackendError> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .timeout(std::time::Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(std::time::Duration::from_secs(config.timeouts.connect_secs));
    #[cfg(target_arch = "wasm32")]
    let _ = config;
    builder.build().map_err(|e| BackendError::HttpClientBuild(e.to_string()))
}

/// Attach `apikey` plus a bearer token; the anon key stands in when no user
/// token is available.
pub(crate) fn authorize(
    request: reqwest::RequestBuilder,
    config: &BackendConfig,
    access_token: Option<&str>,
) -> reqwest::RequestBuilder {
    let bearer = access_token.unwrap_or(&config.anon_key);
    request
        .header("apikey", &config.anon_key)
        .header(reqwest::header::AUTHORIZATION, format!("Bearer {bearer}"))
}

/// Send `request` and return the body text of a 2xx response.
pub(crate) async fn send_text(request: reqwest::RequestBuilder) -> Result<String, BackendError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let text = response.text().await?;
    if !(200..300).contains(&status) {
        return Err(BackendError::Api { status, message: error_message(status, &text) });
    }
    Ok(text)
}

/// Pull the human-readable message out of an auth or storage error body.
///
/// Auth errors use `msg` / `error_description`; storage errors use `message`
/// with a short `error` code. Falls back to the raw body, then the status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(field).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return text.trim().to_owned();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("HTTP {status}") } else { trimmed.to_owned() }
}

/// Percent-encode each `/`-separated segment of an object key.
pub(crate) fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
