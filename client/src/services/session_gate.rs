//! Session gate: decides whether the upload panel may render.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted first on the home route. It resolves the session once on load,
//! follows the provider's change notifications afterwards, and owns the
//! sign-in / sign-out actions. Redirects themselves are performed by the
//! route effects in `util::auth`, which react to the [`AuthState`] written
//! here.
//!
//! ERROR HANDLING
//! ==============
//! Failures become toasts. Nothing is retried; the user repeats the action.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use std::sync::Arc;

use backend::{AuthEvent, AuthProvider, Session, Subscription};

use crate::state::auth::AuthState;
use crate::state::store::Store;
use crate::state::toast::ToastState;

pub const SESSION_CHECK_FAILED_MESSAGE: &str = "Could not verify your session. Please sign in again.";
pub const SIGNED_OUT_MESSAGE: &str = "Signed out successfully.";
pub const SIGNED_IN_MESSAGE: &str = "Signed in.";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required.";

/// What the route should do after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
}

#[derive(Clone)]
pub struct SessionGate<A, T> {
    provider: Arc<dyn AuthProvider>,
    auth: A,
    toasts: T,
}

impl<A, T> SessionGate<A, T>
where
    A: Store<AuthState>,
    T: Store<ToastState>,
{
    pub fn new(provider: Arc<dyn AuthProvider>, auth: A, toasts: T) -> Self {
        Self { provider, auth, toasts }
    }

    /// Ask the provider for the current session and resolve the gate.
    ///
    /// A provider error counts as "no session".
    pub async fn check_session(&self) -> GateDecision {
        match self.provider.get_session().await {
            Ok(session) => self.apply(session.as_ref()),
            Err(e) => {
                log::warn!("session check failed: {e}");
                self.toasts.modify(|t| {
                    t.error(SESSION_CHECK_FAILED_MESSAGE);
                });
                self.apply(None)
            }
        }
    }

    /// React to a provider notification.
    pub fn on_session_change(&self, event: AuthEvent, session: Option<&Session>) -> GateDecision {
        log::debug!("auth event {event:?}, session present: {}", session.is_some());
        self.apply(session)
    }

    /// Route provider notifications into this gate until unsubscribed.
    pub fn subscribe(&self) -> Subscription {
        let gate = self.clone();
        self.provider
            .on_auth_state_change(Arc::new(move |event: AuthEvent, session: Option<&Session>| {
                gate.on_session_change(event, session);
            }))
    }

    /// Sign in from the login view.
    ///
    /// # Errors
    ///
    /// Returns the validation or provider message, which is also shown as a
    /// toast.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        let email = match validate_credentials(email, password) {
            Ok(email) => email,
            Err(message) => {
                self.toasts.modify(|t| {
                    t.error(message);
                });
                return Err(message.to_owned());
            }
        };
        match self.provider.sign_in_with_password(email, password).await {
            Ok(session) => {
                self.apply(Some(&session));
                self.toasts.modify(|t| {
                    t.success(SIGNED_IN_MESSAGE);
                });
                Ok(())
            }
            Err(e) => {
                let message = e.message();
                self.toasts.modify(|t| {
                    t.error(message.clone());
                });
                Err(message)
            }
        }
    }

    /// Sign out. On failure the user stays signed in and sees the provider's
    /// message.
    ///
    /// # Errors
    ///
    /// Returns the provider's message, which is also shown as a toast.
    pub async fn sign_out(&self) -> Result<(), String> {
        match self.provider.sign_out().await {
            Ok(()) => {
                self.toasts.modify(|t| {
                    t.success(SIGNED_OUT_MESSAGE);
                });
                self.apply(None);
                Ok(())
            }
            Err(e) => {
                let message = e.message();
                self.toasts.modify(|t| {
                    t.error(message.clone());
                });
                Err(message)
            }
        }
    }

    fn apply(&self, session: Option<&Session>) -> GateDecision {
        let next = AuthState::from_session(session);
        let decision = if next.is_authenticated() { GateDecision::Render } else { GateDecision::RedirectToLogin };
        self.auth.modify(|state| *state = next);
        decision
    }
}

/// Check the login form before any network call. Returns the trimmed email.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS_MESSAGE`] when either field is blank.
pub fn validate_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(email)
}
