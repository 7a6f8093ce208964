//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so the checks
//! live here as pure predicates plus the effects that act on them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// Only a resolved, session-less state sends the user to login.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    matches!(state, AuthState::Unauthenticated)
}

/// A signed-in user has no business on the login page.
pub fn should_redirect_home(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever auth has resolved and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` as soon as a session appears.
pub fn install_home_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_home) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
