//! Root component and HTML shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the Axum host for every route; `App` is the part
//! that hydrates. App-wide state (auth, toasts, backend clients) is provided
//! here as context so pages and components can pick it up without prop
//! drilling.
//!
//! ERROR HANDLING
//! ==============
//! A backend configuration error replaces the router with a static message.
//! Toasts are still mounted so nothing else has to special-case it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_stack::ToastStack;
use crate::net;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Document shell rendered on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    let body = match net::backend::connect() {
        Ok(backend) => {
            provide_context(backend);
            view! {
                <Router>
                    <main class="app">
                        <Routes fallback=|| view! { <p class="app__not-found">"Page not found."</p> }>
                            <Route path=path!("/login") view=LoginPage />
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("backend not configured: {e}");
            view! {
                <main class="app app--error">
                    <h1>"ImageDrop"</h1>
                    <p class="app__config-error">"The storage backend is not configured."</p>
                    <p class="app__config-detail">{e.to_string()}</p>
                </main>
            }
            .into_any()
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/imagedrop.css" />
        <Title text="ImageDrop" />
        {body}
        <ToastStack />
    }
}
