//! Sign-in page with username-or-email and password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::encode_query_value;
use crate::state::auth::{AuthOutcome, AuthState};
use crate::state::session;
use crate::util::validate;

/// Login page. An MFA challenge redirects to the verify page with the
/// identifier threaded through the query string.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let login_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        login_error.set(None);
        password_error.set(None);
        general_error.set(None);

        // Inline validation before any network call.
        let mut ok = true;
        if let Err(msg) = validate::validate_login(&login.get()) {
            login_error.set(Some(msg.to_owned()));
            ok = false;
        }
        if password.get().is_empty() {
            password_error.set(Some("Password is required".to_owned()));
            ok = false;
        }
        if !ok {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session::login(auth, &login.get_untracked(), &password.get_untracked()).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(AuthOutcome::MfaRequired { identifier, .. }) => {
                    let target = format!("/verify-mfa?email={}", encode_query_value(&identifier));
                    navigate(&target, NavigateOptions::default());
                }
                Ok(AuthOutcome::SignedIn { .. }) => {
                    navigate("/", NavigateOptions::default());
                }
                Ok(AuthOutcome::Accepted { message }) => {
                    let _ = general_error.try_set(message.or_else(|| {
                        Some("Login failed. Please check your credentials.".to_owned())
                    }));
                }
                Err(err) => {
                    let _ = general_error.try_set(Some(
                        err.display_or("Login failed. Please check your credentials.").to_owned(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Encore"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>

                {move || {
                    general_error.get().map(|msg| {
                        view! { <div class="alert alert--error">{msg}</div> }
                    })
                }}

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="login">"Username or Email"</label>
                    <input
                        id="login"
                        class="auth-form__input"
                        type="text"
                        placeholder="johndoe or john@example.com"
                        autocomplete="username"
                        bind:value=login
                    />
                    {move || field_error(login_error.get())}

                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        autocomplete="current-password"
                        bind:value=password
                    />
                    {move || field_error(password_error.get())}

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    <A href="/forgot-password">"Forgot your password?"</A>
                </p>
                <p class="auth-card__footer">
                    "No account yet? " <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}

/// Inline error text under a form field.
pub(super) fn field_error(error: Option<String>) -> Option<impl IntoView> {
    error.map(|msg| view! { <p class="auth-form__error">{msg}</p> })
}
