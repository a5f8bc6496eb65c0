//! Account creation page with live password requirements.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::password_requirements::PasswordRequirements;
use crate::net::api::encode_query_value;
use crate::state::auth::{AuthOutcome, AuthState};
use crate::state::session;
use crate::util::{password, validate};

/// Registration page. Opting into MFA routes through the verify page before
/// a session is granted.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password_value = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let enable_mfa = RwSignal::new(false);

    let username_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let general_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let validate_form = move || {
        let mut ok = true;
        if let Err(msg) = validate::validate_username(&username.get()) {
            username_error.set(Some(msg.to_owned()));
            ok = false;
        }
        if let Err(msg) = validate::validate_email(&email.get()) {
            email_error.set(Some(msg.to_owned()));
            ok = false;
        }
        let pw = password_value.get();
        if pw.is_empty() {
            password_error.set(Some("Password is required".to_owned()));
            ok = false;
        } else if !password::is_valid(&pw) {
            password_error.set(Some("Password does not meet all requirements".to_owned()));
            ok = false;
        }
        if pw != confirm.get() {
            confirm_error.set(Some("Passwords do not match".to_owned()));
            ok = false;
        }
        ok
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        username_error.set(None);
        email_error.set(None);
        password_error.set(None);
        confirm_error.set(None);
        general_error.set(None);
        success.set(None);

        if !validate_form() {
            return;
        }

        submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session::register(
                auth,
                &username.get_untracked(),
                &email.get_untracked(),
                &password_value.get_untracked(),
                enable_mfa.get_untracked(),
            )
            .await;
            let _ = submitting.try_set(false);
            match result {
                Ok(AuthOutcome::MfaRequired { identifier, .. }) => {
                    let target = format!("/verify-mfa?email={}", encode_query_value(&identifier));
                    navigate(&target, NavigateOptions::default());
                }
                Ok(AuthOutcome::SignedIn { message, .. }) => {
                    let _ = success.try_set(Some(
                        message.unwrap_or_else(|| "Registration successful!".to_owned()),
                    ));
                    navigate("/", NavigateOptions::default());
                }
                Ok(AuthOutcome::Accepted { message }) => {
                    let _ = success.try_set(Some(
                        message.unwrap_or_else(|| "Registration successful!".to_owned()),
                    ));
                }
                Err(err) => {
                    // Route the backend message to the field it names.
                    let msg = err
                        .display_or("Registration failed. Please try again.")
                        .to_owned();
                    let lower = msg.to_lowercase();
                    let slot = if lower.contains("username") {
                        username_error
                    } else if lower.contains("email") {
                        email_error
                    } else {
                        general_error
                    };
                    let _ = slot.try_set(Some(msg));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Encore"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>

                {move || success.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                {move || general_error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="username">"Username *"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        placeholder="johndoe"
                        autocomplete="username"
                        bind:value=username
                    />
                    {move || super::login::field_error(username_error.get())}

                    <label class="auth-form__label" for="email">"Email *"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="john@example.com"
                        autocomplete="email"
                        bind:value=email
                    />
                    {move || super::login::field_error(email_error.get())}

                    <label class="auth-form__label" for="password">"Password *"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        bind:value=password_value
                    />
                    <PasswordRequirements password=password_value/>
                    {move || super::login::field_error(password_error.get())}

                    <label class="auth-form__label" for="confirm">"Confirm password *"</label>
                    <input
                        id="confirm"
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        bind:value=confirm
                    />
                    {move || super::login::field_error(confirm_error.get())}

                    <label class="auth-form__checkbox">
                        <input type="checkbox" bind:checked=enable_mfa/>
                        "Enable multi-factor authentication"
                    </label>

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
