//! Password reset request page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::auth_api::{AuthApi, HttpAuthApi};
use crate::util::validate;

/// Asks for an email address and requests a reset link.
///
/// The confirmation copy is the same whether or not the account exists;
/// the backend does not disclose which.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        notice.set(None);

        if let Err(msg) = validate::validate_email(&email.get()) {
            error.set(Some(msg.to_owned()));
            return;
        }

        submitting.set(true);
        leptos::task::spawn_local(async move {
            let result = HttpAuthApi.request_password_reset(&email.get_untracked()).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(resp) => {
                    let _ = notice.try_set(Some(resp.message.unwrap_or_else(|| {
                        "If an account exists for that address, a reset link is on its way."
                            .to_owned()
                    })));
                }
                Err(err) => {
                    let _ = error.try_set(Some(
                        err.display_or("Could not request a reset. Please try again.").to_owned(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Forgot your password?"</h1>
                <p class="auth-card__subtitle">
                    "Enter your email and we will send you a reset link."
                </p>

                {move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="john@example.com"
                        autocomplete="email"
                        bind:value=email
                    />

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    <A href="/login">"Back to sign in"</A>
                </p>
            </div>
        </div>
    }
}
