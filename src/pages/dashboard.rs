//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;

/// Dashboard page — greets the signed-in user and links into the app.
/// Redirects to `/login` once restore settles without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let greeting = move || {
        auth.get()
            .user
            .map(|u| {
                let name = u.full_name.filter(|n| !n.is_empty()).unwrap_or(u.username);
                format!("Welcome back, {name}")
            })
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="dashboard">
                <Show
                    when=move || !auth.get().loading
                    fallback=|| view! { <p class="dashboard__loading">"Loading..."</p> }
                >
                    <h1 class="dashboard__greeting">{greeting}</h1>
                    <div class="dashboard__tiles">
                        <A href="/photos" attr:class="dashboard__tile">
                            <h2>"Photos"</h2>
                            <p>"Your shots from the shows you went to."</p>
                        </A>
                    </div>
                </Show>
            </main>
        </div>
    }
}
