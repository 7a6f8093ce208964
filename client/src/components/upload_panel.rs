//! Drop zone, file picker, and gallery grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the home page only after the session gate resolves to
//! `Authenticated`. Owns the page's [`GalleryState`] signal and hands every
//! user action to [`UploadService`]. Browser `File` handles are read into
//! memory here so the service never touches web-sys.

#[cfg(test)]
#[path = "upload_panel_test.rs"]
mod upload_panel_test;

use std::sync::Arc;

use backend::Backend;
use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::services::clock::SystemClock;
use crate::services::uploads::UploadService;
use crate::state::gallery::GalleryState;
use crate::state::toast::ToastState;

/// CSS class for the drop zone given the drag and upload flags.
pub fn drop_zone_class(state: &GalleryState) -> &'static str {
    match (state.is_dragging, state.uploading()) {
        (true, _) => "drop-zone drop-zone--active",
        (false, true) => "drop-zone drop-zone--busy",
        (false, false) => "drop-zone",
    }
}

/// Placeholder text for the gallery area, if any.
pub fn gallery_placeholder(state: &GalleryState) -> Option<&'static str> {
    if !state.images.is_empty() {
        None
    } else if state.loading {
        Some("Loading images...")
    } else {
        Some("No images yet. Drop some above to get started.")
    }
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gallery = RwSignal::new(GalleryState::default());
    let service = UploadService::new(backend.storage.clone(), backend.bucket.clone(), Arc::new(SystemClock), gallery, toasts);

    #[cfg(feature = "hydrate")]
    {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            service.refresh().await;
        });
    }

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !gallery.with(|g| g.is_dragging) {
            gallery.update(GalleryState::drag_enter);
        }
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        gallery.update(GalleryState::drag_leave);
    };

    let on_drop = {
        let service = service.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            gallery.update(GalleryState::drop_files);
            #[cfg(feature = "hydrate")]
            {
                let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) else {
                    return;
                };
                let service = service.clone();
                leptos::task::spawn_local(async move {
                    let picked = crate::util::file::read_file_list(list).await;
                    service.upload_files(picked).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &service;
            }
        }
    };

    let on_pick = {
        let service = service.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "hydrate")]
            {
                use wasm_bindgen::JsCast;

                let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                    return;
                };
                let Some(list) = input.files() else {
                    return;
                };
                let service = service.clone();
                leptos::task::spawn_local(async move {
                    let picked = crate::util::file::read_file_list(list).await;
                    // Allow picking the same file again.
                    input.set_value("");
                    service.upload_files(picked).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (ev, &service);
            }
        }
    };

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let service = service.clone();
            leptos::task::spawn_local(async move {
                service.remove_image(&id).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &service);
        }
    });

    view! {
        <section class="upload-panel">
            <div
                class=move || gallery.with(drop_zone_class)
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <p class="drop-zone__hint">"Drag and drop images here, or"</p>
                <label class="drop-zone__pick">
                    "Choose files"
                    <input class="drop-zone__input" type="file" accept="image/*" multiple on:change=on_pick />
                </label>
                <Show when=move || gallery.with(GalleryState::uploading)>
                    <p class="drop-zone__status">"Uploading..."</p>
                </Show>
            </div>
            {move || gallery.with(gallery_placeholder).map(|text| view! { <p class="gallery__placeholder">{text}</p> })}
            <div class="gallery">
                <For each=move || gallery.with(|g| g.images.clone()) key=|image| image.id.clone() let:image>
                    <ImageCard image on_delete />
                </For>
            </div>
        </section>
    }
}
