//! One gallery entry: thumbnail, original file name, and a delete button.

use leptos::prelude::*;

use crate::state::gallery::UploadedImage;

#[component]
pub fn ImageCard(image: UploadedImage, on_delete: Callback<String>) -> impl IntoView {
    let UploadedImage { id, url, name } = image;
    let alt = name.clone();
    let title = name.clone();

    view! {
        <figure class="image-card">
            <img class="image-card__img" src=url alt=alt loading="lazy" />
            <figcaption class="image-card__name" title=title>{name}</figcaption>
            <button class="image-card__delete" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </figure>
    }
}
