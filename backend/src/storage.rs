//! Storage provider contract and its REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload panel talks to object storage only through
//! [`StorageProvider`]. [`StorageClient`] maps it onto the provider's
//! `/storage/v1/object` endpoints, authorizing with the signed-in user's token
//! when one is held and with the anon key otherwise.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::http;
use crate::session::SessionSlot;

pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const CACHE_CONTROL_SECS: u32 = 3600;

/// Placeholder object the provider creates to materialize empty folders.
const FOLDER_PLACEHOLDER: &str = ".emptyFolderPlaceholder";

/// One object returned by a bucket listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoredObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ObjectMetadata {
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Listing window and ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOptions {
    pub prefix: String,
    pub limit: u32,
    pub offset: u32,
    pub sort_column: String,
    pub order: SortOrder,
}

impl Default for ListOptions {
    /// Newest first, matching the gallery's display order.
    fn default() -> Self {
        Self {
            prefix: String::new(),
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            sort_column: "created_at".into(),
            order: SortOrder::Desc,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
    offset: u32,
    sort_by: SortBy<'a>,
}

#[derive(Serialize)]
struct SortBy<'a> {
    column: &'a str,
    order: SortOrder,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

/// Operations the UI needs from object storage.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait StorageProvider: Send + Sync {
    /// Store `body` under `key`. Never overwrites an existing object.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (including key conflicts) or a
    /// transport error.
    async fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), BackendError>;

    /// Public address of `key`. Pure string assembly; cannot fail.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Delete `keys`, returning the names the provider reports as removed.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection or a transport error.
    async fn remove(&self, bucket: &str, keys: &[String]) -> Result<Vec<String>, BackendError>;

    /// List objects in `bucket`.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection, a transport error, or a parse error.
    async fn list(&self, bucket: &str, options: &ListOptions) -> Result<Vec<StoredObject>, BackendError>;
}

pub struct StorageClient {
    http: reqwest::Client,
    config: BackendConfig,
    session: SessionSlot,
}

impl StorageClient {
    pub fn new(http: reqwest::Client, config: BackendConfig, session: SessionSlot) -> Self {
        Self { http, config, session }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        self.config
            .endpoint(&format!("/storage/v1/object/{}/{}", http::encode_key(bucket), http::encode_key(key)))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.session.access_token();
        http::authorize(request, &self.config, token.as_deref())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl StorageProvider for StorageClient {
    async fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), BackendError> {
        let size = body.len();
        let request = self
            .authorized(self.http.post(self.object_url(bucket, key)))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, format!("max-age={CACHE_CONTROL_SECS}"))
            .header("x-upsert", "false")
            .body(body);
        http::send_text(request).await?;
        tracing::debug!(%bucket, %key, size, "object uploaded");
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        self.config.endpoint(&format!(
            "/storage/v1/object/public/{}/{}",
            http::encode_key(bucket),
            http::encode_key(key)
        ))
    }

    async fn remove(&self, bucket: &str, keys: &[String]) -> Result<Vec<String>, BackendError> {
        let url = self.config.endpoint(&format!("/storage/v1/object/{}", http::encode_key(bucket)));
        let request = self.authorized(self.http.delete(url)).json(&RemoveRequest { prefixes: keys });
        let text = http::send_text(request).await?;
        let removed = parse_removed(&text)?;
        tracing::debug!(%bucket, requested = keys.len(), removed = removed.len(), "objects removed");
        Ok(removed)
    }

    async fn list(&self, bucket: &str, options: &ListOptions) -> Result<Vec<StoredObject>, BackendError> {
        let url = self.config.endpoint(&format!("/storage/v1/object/list/{}", http::encode_key(bucket)));
        let body = ListRequest {
            prefix: &options.prefix,
            limit: options.limit,
            offset: options.offset,
            sort_by: SortBy { column: &options.sort_column, order: options.order },
        };
        let text = http::send_text(self.authorized(self.http.post(url)).json(&body)).await?;
        parse_listing(&text)
    }
}

fn parse_removed(body: &str) -> Result<Vec<String>, BackendError> {
    #[derive(Deserialize)]
    struct Removed {
        name: String,
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let removed: Vec<Removed> = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    Ok(removed.into_iter().map(|r| r.name).collect())
}

/// Parse a listing, dropping folder entries (no `id`) and placeholders.
fn parse_listing(body: &str) -> Result<Vec<StoredObject>, BackendError> {
    let objects: Vec<StoredObject> = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    Ok(objects
        .into_iter()
        .filter(|o| o.id.is_some() && o.name != FOLDER_PLACEHOLDER)
        .collect())
}
