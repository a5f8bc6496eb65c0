//! Password reset completion page, reached from an emailed link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::password_requirements::PasswordRequirements;
use crate::net::auth_api::{AuthApi, HttpAuthApi};
use crate::net::types::PasswordResetRequest;
use crate::util::password;

/// New-password form bound to the reset token from the `token` query
/// parameter. The new password goes through the same rule set as signup.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let token = Memo::new(move |_| query.read().get("token").unwrap_or_default());
    let password_value = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // A link without a token cannot complete the flow.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if token.get().is_empty() {
                navigate("/forgot-password", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        notice.set(None);

        let pw = password_value.get();
        if !password::is_valid(&pw) {
            error.set(Some("Password does not meet all requirements".to_owned()));
            return;
        }
        if pw != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = HttpAuthApi
                .reset_password(&PasswordResetRequest {
                    token: token.get_untracked(),
                    password: password_value.get_untracked(),
                })
                .await;
            let _ = submitting.try_set(false);
            match result {
                Ok(resp) => {
                    let _ = notice.try_set(Some(resp.message.unwrap_or_else(|| {
                        "Password updated. You can sign in now.".to_owned()
                    })));
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => {
                    let _ = error.try_set(Some(
                        err.display_or("Could not reset the password. The link may have expired.")
                            .to_owned(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Choose a new password"</h1>

                {move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="password">"New password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        bind:value=password_value
                    />
                    <PasswordRequirements password=password_value/>

                    <label class="auth-form__label" for="confirm">"Confirm new password"</label>
                    <input
                        id="confirm"
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        bind:value=confirm
                    />

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Reset password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
