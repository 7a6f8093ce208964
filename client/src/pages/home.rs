//! Home page: the session gate wrapped around the upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the session on mount and subscribes to provider notifications for
//! as long as the page is mounted. The upload panel only renders once the
//! state is `Authenticated`; `Loading` shows a placeholder and
//! `Unauthenticated` is redirected by the route effect.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use backend::Backend;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::upload_panel::UploadPanel;
use crate::services::session_gate::SessionGate;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

/// Header line for the signed-in user.
pub fn signed_in_label(state: &AuthState) -> String {
    state
        .display_name()
        .map_or_else(String::new, |name| format!("Signed in as {name}"))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<Backend>();
    let gate = SessionGate::new(backend.auth.clone(), auth, toasts);
    let signing_out = RwSignal::new(false);

    install_unauth_redirect(auth, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        let subscription = gate.subscribe();
        on_cleanup(move || subscription.unsubscribe());

        let gate = gate.clone();
        leptos::task::spawn_local(async move {
            gate.check_session().await;
        });
    }

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            leptos::task::spawn_local(async move {
                // Failure keeps the user on this page; the gate already toasted.
                let _ = gate.sign_out().await;
                signing_out.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &gate;
        }
    };

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                auth.with(AuthState::is_loading)
                    .then(|| view! { <p class="home__loading">"Checking your session..."</p> })
            }
        >
            <header class="home__header">
                <h1>"ImageDrop"</h1>
                <span class="home__user">{move || auth.with(signed_in_label)}</span>
                <button class="home__sign-out" on:click=on_sign_out.clone() disabled=move || signing_out.get()>
                    "Sign Out"
                </button>
            </header>
            <UploadPanel />
        </Show>
    }
}
