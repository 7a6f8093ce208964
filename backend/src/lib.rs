//! # backend
//!
//! Typed clients for the hosted backend-as-a-service that owns authentication
//! and object storage for imagedrop.
//!
//! ARCHITECTURE
//! ============
//! `auth` and `storage` each expose a provider trait plus a `reqwest`-backed
//! client. The traits are the seam the UI services depend on, so tests can
//! swap in mocks. `Backend` bundles both clients around one shared session
//! slot so storage calls pick up whatever token auth currently holds.

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
mod http;
pub mod policy;
pub mod session;
pub mod storage;

use std::sync::Arc;

pub use auth::{AuthClient, AuthProvider};
pub use config::BackendConfig;
pub use error::BackendError;
pub use events::{AuthEvent, Subscription};
pub use session::{AuthUser, MemorySessionStore, Session, SessionStore};
pub use storage::{ListOptions, StorageClient, StorageProvider, StoredObject};

/// Connected auth + storage clients sharing one HTTP client and session slot.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<AuthClient>,
    pub storage: Arc<StorageClient>,
    pub bucket: String,
}

impl Backend {
    /// Build both clients from config, restoring any session `store` holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn connect(config: BackendConfig, store: Arc<dyn SessionStore>) -> Result<Self, BackendError> {
        let http = http::build_client(&config)?;
        let auth = AuthClient::new(http.clone(), config.clone(), store);
        let storage = StorageClient::new(http, config.clone(), auth.session_slot());
        Ok(Self { auth: Arc::new(auth), storage: Arc::new(storage), bucket: config.bucket })
    }
}
