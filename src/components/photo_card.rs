//! Thumbnail card for one photo in the gallery grid.

use leptos::prelude::*;

use crate::net::api::photo_thumbnail_url;

/// A single photo thumbnail with its optional caption.
#[component]
pub fn PhotoCard(id: i64, caption: Option<String>) -> impl IntoView {
    let caption = caption.filter(|c| !c.is_empty());
    let alt = caption.clone().unwrap_or_else(|| "Show photo".to_owned());

    view! {
        <figure class="photo-card">
            <img class="photo-card__img" src=photo_thumbnail_url(id) alt=alt loading="lazy"/>
            {caption.map(|c| view! { <figcaption class="photo-card__caption">{c}</figcaption> })}
        </figure>
    }
}
