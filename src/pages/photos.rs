//! Photo gallery grouped by show.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::photo_card::PhotoCard;
use crate::net::api::{group_photos_by_show, ShowGroup};
use crate::state::auth::AuthState;

/// Photos page — one section per show with artist, venue, and date.
/// Redirects to `/login` once restore settles without a session.
#[component]
pub fn PhotosPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Photo listing — fetches on mount; a failed fetch renders as empty.
    let photos = LocalResource::new(|| async {
        crate::net::api::fetch_photos().await.unwrap_or_default()
    });

    view! {
        <div class="page">
            <Navbar/>
            <main class="photos">
                <Suspense fallback=move || view! { <p class="photos__loading">"Loading photos..."</p> }>
                    {move || {
                        photos.get().map(|list| {
                            let total = list.len();
                            let groups = group_photos_by_show(list);
                            view! {
                                <header class="photos__header">
                                    <h1>"Photos"</h1>
                                    <span class="photos__count">
                                        {format!("{total} photo{}", if total == 1 { "" } else { "s" })}
                                    </span>
                                </header>
                                {if groups.is_empty() {
                                    view! {
                                        <p class="photos__empty">
                                            "No photos yet. They will show up here once you add some."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    groups
                                        .into_iter()
                                        .map(show_section)
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }}
                            }
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

fn show_section(group: ShowGroup) -> impl IntoView {
    let subtitle = if group.show_date.is_empty() {
        group.venue_name.clone()
    } else {
        format!("{} \u{b7} {}", group.venue_name, group.show_date)
    };

    view! {
        <section class="photos__show">
            <header class="photos__show-header">
                <h2>{group.artist_name}</h2>
                <span class="photos__show-meta">{subtitle}</span>
            </header>
            <div class="photos__grid">
                {group
                    .photos
                    .into_iter()
                    .map(|p| view! { <PhotoCard id=p.id caption=p.caption/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
