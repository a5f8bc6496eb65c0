//! Top navigation bar for signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session;

/// Navigation bar with section links, the signed-in username, and sign-out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = move || {
        auth.get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::logout(auth).await;
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Encore"</A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">"Dashboard"</A>
                <A href="/photos" attr:class="navbar__link">"Photos"</A>
            </div>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{username}</span>
            <button class="btn btn--ghost" on:click=on_logout>
                "Sign out"
            </button>
        </nav>
    }
}
