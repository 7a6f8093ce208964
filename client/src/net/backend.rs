//! Backend connection for the running app.
//!
//! Config keys are baked in at compile time for both the SSR and the hydrate
//! build, so the server render and the browser always agree on whether the
//! backend is configured. Set them in the environment of the build, not only
//! of the running host.
//!
//! Client-side (hydrate): the session lives in `localStorage`.
//! Server-side (SSR): sessions are held in memory for the duration of the
//! render.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed config is returned to the caller so the root
//! component can render a configuration message instead of panicking.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::sync::Arc;

use backend::config::{ANON_KEY_KEY, BUCKET_KEY, CONNECT_TIMEOUT_KEY, REQUEST_TIMEOUT_KEY, URL_KEY};
use backend::{Backend, BackendConfig, BackendError, Session, SessionStore};

use crate::util::ui_persistence;

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "imagedrop.auth.session";

/// Build the shared clients from the baked (or server) configuration.
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid, or the HTTP
/// client cannot be built.
pub fn connect() -> Result<Backend, BackendError> {
    Backend::connect(config()?, session_store())
}

/// Backend configuration baked into this build.
///
/// # Errors
///
/// Returns an error if a required key was not set at build time or a value
/// is malformed.
pub fn config() -> Result<BackendConfig, BackendError> {
    BackendConfig::from_lookup(|key| baked_value(key).map(str::to_owned))
}

fn baked_value(key: &str) -> Option<&'static str> {
    match key {
        URL_KEY => option_env!("BACKEND_URL"),
        ANON_KEY_KEY => option_env!("BACKEND_ANON_KEY"),
        BUCKET_KEY => option_env!("STORAGE_BUCKET"),
        REQUEST_TIMEOUT_KEY => option_env!("BACKEND_REQUEST_TIMEOUT_SECS"),
        CONNECT_TIMEOUT_KEY => option_env!("BACKEND_CONNECT_TIMEOUT_SECS"),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
fn session_store() -> Arc<dyn SessionStore> {
    Arc::new(BrowserSessionStore)
}

#[cfg(not(feature = "hydrate"))]
fn session_store() -> Arc<dyn SessionStore> {
    Arc::new(backend::MemorySessionStore::default())
}

/// Session persisted in `localStorage` under [`SESSION_STORAGE_KEY`].
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        ui_persistence::load_json(SESSION_STORAGE_KEY)
    }

    fn save(&self, session: &Session) {
        ui_persistence::save_json(SESSION_STORAGE_KEY, session);
    }

    fn clear(&self) {
        ui_persistence::remove(SESSION_STORAGE_KEY);
    }
}
