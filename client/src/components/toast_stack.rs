//! Toast overlay for transient success and error messages.
//!
//! Toasts dismiss themselves after [`TOAST_TIMEOUT_MS`] in the browser and
//! can be closed early by the user.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.with(|t| t.items.clone()) key=|toast| toast.id let:toast>
                <ToastItem toast />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let Toast { id, kind, message } = toast;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        toasts.update(|t| t.dismiss(id));
    });

    view! {
        <div class=toast_class(kind)>
            <span class="toast__message">{message}</span>
            <button
                class="toast__close"
                aria-label="Dismiss"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "×"
            </button>
        </div>
    }
}
