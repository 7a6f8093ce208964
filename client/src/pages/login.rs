//! Login page: email + password sign-in against the auth provider.

use backend::Backend;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::services::session_gate::{SessionGate, validate_credentials};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_home_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<Backend>();
    let gate = SessionGate::new(backend.auth.clone(), auth, toasts);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_home_redirect(auth, use_navigate());

    // An existing session skips the form entirely.
    #[cfg(feature = "hydrate")]
    {
        let gate = gate.clone();
        leptos::task::spawn_local(async move {
            gate.check_session().await;
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let gate = gate.clone();
            leptos::task::spawn_local(async move {
                match gate.sign_in(&email_value, &password_value).await {
                    Ok(()) => info.set(String::new()),
                    Err(message) => info.set(message),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &gate;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ImageDrop"</h1>
                <p class="login-card__subtitle">"Sign in to manage your images"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
