//! Auth provider contract and its REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate in the client depends only on [`AuthProvider`]. The
//! concrete [`AuthClient`] talks to the provider's `/auth/v1` endpoints,
//! keeps the current session in a [`SessionSlot`] shared with storage, and
//! mirrors it into a [`SessionStore`] so a reload picks it back up.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::events::{AuthCallback, AuthEvent, AuthEvents, Subscription};
use crate::http;
use crate::session::{Session, SessionSlot, SessionStore, now_secs, parse_token_response};

/// Operations the UI needs from the auth provider.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AuthProvider: Send + Sync {
    /// Current session, refreshed first if it is about to expire.
    ///
    /// # Errors
    ///
    /// Returns an error if a needed refresh could not reach the provider.
    async fn get_session(&self) -> Result<Option<Session>, BackendError>;

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection or a transport error.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Revoke the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider did not confirm the sign-out; the
    /// local session is kept in that case.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Register a listener for login, logout and refresh events.
    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription;
}

pub struct AuthClient {
    http: reqwest::Client,
    config: BackendConfig,
    store: Arc<dyn SessionStore>,
    slot: SessionSlot,
    events: AuthEvents,
}

impl AuthClient {
    /// Build a client, seeding the session slot from `store`.
    pub fn new(http: reqwest::Client, config: BackendConfig, store: Arc<dyn SessionStore>) -> Self {
        let slot = SessionSlot::default();
        slot.set(store.load());
        Self { http, config, store, slot, events: AuthEvents::default() }
    }

    /// Handle to the live session, shared with the storage client.
    #[must_use]
    pub fn session_slot(&self) -> SessionSlot {
        self.slot.clone()
    }

    fn token_url(&self, grant_type: &str) -> String {
        self.config.endpoint(&format!("/auth/v1/token?grant_type={grant_type}"))
    }

    async fn request_token(&self, grant_type: &str, body: serde_json::Value) -> Result<Session, BackendError> {
        let request = http::authorize(self.http.post(self.token_url(grant_type)), &self.config, None).json(&body);
        let text = http::send_text(request).await?;
        parse_token_response(&text, now_secs())
    }

    fn install(&self, session: Session, event: AuthEvent) -> Session {
        self.store.save(&session);
        self.slot.set(Some(session.clone()));
        self.events.emit(event, Some(&session));
        session
    }

    fn clear(&self) {
        self.store.clear();
        self.slot.set(None);
        self.events.emit(AuthEvent::SignedOut, None);
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Option<Session>, BackendError> {
        match self
            .request_token("refresh_token", serde_json::json!({ "refresh_token": refresh_token }))
            .await
        {
            Ok(session) => Ok(Some(self.install(session, AuthEvent::TokenRefreshed))),
            Err(e) if e.is_auth_rejection() => {
                tracing::warn!(error = %e, "session refresh rejected; clearing session");
                self.clear();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl AuthProvider for AuthClient {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        let Some(session) = self.slot.get() else {
            return Ok(None);
        };
        if !session.is_expired(now_secs()) {
            return Ok(Some(session));
        }
        match session.refresh_token.as_deref() {
            Some(refresh_token) => self.refresh(refresh_token).await,
            None => {
                self.clear();
                Ok(None)
            }
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let session = self
            .request_token("password", serde_json::json!({ "email": email, "password": password }))
            .await?;
        tracing::debug!(user_id = %session.user.id, "signed in");
        Ok(self.install(session, AuthEvent::SignedIn))
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let Some(token) = self.slot.access_token() else {
            self.clear();
            return Ok(());
        };
        let request = http::authorize(self.http.post(self.config.endpoint("/auth/v1/logout")), &self.config, Some(&token));
        match http::send_text(request).await {
            Ok(_) => {}
            // The token is already dead on the provider side; finish locally.
            Err(BackendError::Api { status: 401 | 403 | 404, .. }) => {}
            Err(e) => return Err(e),
        }
        self.clear();
        Ok(())
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        self.events.subscribe(callback)
    }
}
