use backend::AuthUser;

use super::*;

fn session(email: Option<&str>) -> Session {
    Session {
        access_token: "jwt".to_owned(),
        refresh_token: None,
        expires_at: None,
        user: AuthUser { id: "u1".to_owned(), email: email.map(str::to_owned) },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

// =============================================================
// from_session
// =============================================================

#[test]
fn from_session_none_is_unauthenticated() {
    assert_eq!(AuthState::from_session(None), AuthState::Unauthenticated);
}

#[test]
fn from_session_carries_identity_and_token() {
    let state = AuthState::from_session(Some(&session(Some("a@b.co"))));
    assert_eq!(
        state,
        AuthState::Authenticated(SignedInUser {
            user_id: "u1".to_owned(),
            email: Some("a@b.co".to_owned()),
            token: "jwt".to_owned(),
        })
    );
}

#[test]
fn display_name_prefers_email() {
    assert_eq!(AuthState::from_session(Some(&session(Some("a@b.co")))).display_name().as_deref(), Some("a@b.co"));
    assert_eq!(AuthState::from_session(Some(&session(None))).display_name().as_deref(), Some("u1"));
    assert_eq!(AuthState::Unauthenticated.display_name(), None);
}
