//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the session gate and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use backend::Session;

/// The signed-in identity the UI cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedInUser {
    pub user_id: String,
    pub email: Option<String>,
    pub token: String,
}

/// Where the current page view stands with the auth provider.
///
/// Starts in `Loading` until the first session check resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(SignedInUser),
}

impl AuthState {
    /// Resolved state for a session reported by the provider.
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(s) => Self::Authenticated(SignedInUser {
                user_id: s.user.id.clone(),
                email: s.user.email.clone(),
                token: s.access_token.clone(),
            }),
            None => Self::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SignedInUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Email when known, user id otherwise.
    pub fn display_name(&self) -> Option<String> {
        self.user()
            .map(|u| u.email.clone().unwrap_or_else(|| u.user_id.clone()))
    }
}
