//! Session model and the persistence seam behind it.
//!
//! DESIGN
//! ======
//! The auth provider owns session validity; this crate only carries the token
//! pair it handed out, remembers it across page loads through a
//! [`SessionStore`], and refreshes it once the expiry margin is reached.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::BackendError;

/// Seconds before `expires_at` at which a session counts as expired.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Identity attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token pair plus identity issued by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as unix seconds, when the provider reported one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// Whether the access token is within [`EXPIRY_MARGIN_SECS`] of expiring.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp - EXPIRY_MARGIN_SECS <= now_secs)
    }
}

/// Token endpoint payload (`/auth/v1/token`).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    pub(crate) fn into_session(self, now_secs: i64) -> Session {
        let expires_at = self.expires_at.or_else(|| self.expires_in.map(|secs| now_secs + secs));
        Session { access_token: self.access_token, refresh_token: self.refresh_token, expires_at, user: self.user }
    }
}

pub(crate) fn parse_token_response(body: &str, now_secs: i64) -> Result<Session, BackendError> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    if token.access_token.is_empty() {
        return Err(BackendError::Parse("token response without access_token".into()));
    }
    Ok(token.into_session(now_secs))
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Where a session survives page reloads (browser storage, memory in tests).
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new(initial: Option<Session>) -> Self {
        Self { inner: Mutex::new(initial) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, session: &Session) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

// =============================================================================
// SHARED SLOT
// =============================================================================

/// Current in-memory session, shared between the auth and storage clients.
#[derive(Clone, Default)]
pub struct SessionSlot {
    inner: Arc<Mutex<Option<Session>>>,
}

impl SessionSlot {
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, session: Option<Session>) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.access_token.clone())
    }
}

/// Current wall-clock time in unix seconds.
#[must_use]
pub fn now_secs() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
