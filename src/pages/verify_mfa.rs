//! MFA code verification page.
//!
//! Reached from login/register when the backend raises a challenge; the
//! identifier arrives in the `email` query parameter. Emailed verification
//! links may also carry a `code` parameter, which pre-fills the input.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth_api::{AuthApi, HttpAuthApi};
use crate::state::auth::AuthState;
use crate::state::session;
use crate::util::validate::sanitize_mfa_code;

/// Six-digit code entry completing a pending MFA challenge.
#[component]
pub fn VerifyMfaPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = Memo::new(move |_| query.read().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let resend_notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let resending = RwSignal::new(false);

    // Without an identifier there is no challenge to complete.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if email.get().is_empty() {
                navigate("/login", NavigateOptions::default());
            } else if let Some(prefill) = query.read_untracked().get("code") {
                code.set(sanitize_mfa_code(&prefill));
            }
        });
    }

    let on_code_input = move |ev: leptos::ev::Event| {
        code.set(sanitize_mfa_code(&event_target_value(&ev)));
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);
            resend_notice.set(None);

            if code.get().len() != 6 {
                error.set(Some("Please enter a valid 6-digit code".to_owned()));
                return;
            }

            submitting.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result =
                    session::verify_mfa(auth, &email.get_untracked(), &code.get_untracked()).await;
                let _ = submitting.try_set(false);
                match result {
                    Ok(true) => navigate("/", NavigateOptions::default()),
                    Ok(false) => {
                        let _ = error.try_set(Some(
                            "Invalid or expired code. Please try again.".to_owned(),
                        ));
                    }
                    Err(err) => {
                        let _ = error.try_set(Some(
                            err.display_or("Invalid or expired code. Please try again.")
                                .to_owned(),
                        ));
                    }
                }
            });
        }
    };

    let on_resend = move |_| {
        error.set(None);
        resend_notice.set(None);
        resending.set(true);
        leptos::task::spawn_local(async move {
            let result = HttpAuthApi.resend_mfa(&email.get_untracked()).await;
            let _ = resending.try_set(false);
            match result {
                Ok(resp) => {
                    let _ = code.try_set(String::new());
                    let _ = resend_notice.try_set(Some(resp.message.unwrap_or_else(|| {
                        "Verification code resent successfully!".to_owned()
                    })));
                }
                Err(err) => {
                    let _ = error.try_set(Some(
                        err.display_or("Failed to resend code. Please try again.").to_owned(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Verify your account"</h1>
                <p class="auth-card__subtitle">"Enter the 6-digit code sent to"</p>
                <p class="auth-card__identifier">{move || email.get()}</p>

                {move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}
                {move || {
                    resend_notice.get().map(|msg| {
                        view! { <div class="alert alert--success">{msg}</div> }
                    })
                }}

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="code">"Verification code"</label>
                    <input
                        id="code"
                        class="auth-form__input auth-form__input--code"
                        type="text"
                        inputmode="numeric"
                        placeholder="000000"
                        autocomplete="one-time-code"
                        prop:value=move || code.get()
                        on:input=on_code_input
                    />

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>

                <button
                    class="btn btn--ghost"
                    on:click=on_resend
                    disabled=move || resending.get()
                >
                    {move || if resending.get() { "Resending..." } else { "Resend code" }}
                </button>
            </div>
        </div>
    }
}
