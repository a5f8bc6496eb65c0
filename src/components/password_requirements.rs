//! Live password requirements checklist shown under password inputs.

use leptos::prelude::*;

use crate::util::password;

/// Renders the rule checklist for the current password value.
///
/// Hidden while the input is empty. Satisfied warning rules stay hidden;
/// a violated warning rule renders in warning style rather than error
/// style, even though it still blocks submission.
#[component]
pub fn PasswordRequirements(password: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !password.get().is_empty()>
            <div class="password-reqs">
                <p class="password-reqs__title">"Password requirements:"</p>
                {move || {
                    password::evaluate(&password.get())
                        .into_iter()
                        .filter(|r| !(r.is_warning && r.passed))
                        .map(|r| {
                            let (row_class, mark) = if r.is_warning && !r.passed {
                                ("password-reqs__row password-reqs__row--warning", "!")
                            } else if r.passed {
                                ("password-reqs__row password-reqs__row--passed", "\u{2713}")
                            } else {
                                ("password-reqs__row password-reqs__row--failed", "\u{2717}")
                            };
                            view! {
                                <div class=row_class>
                                    <span class="password-reqs__mark">{mark}</span>
                                    <span class="password-reqs__label">{r.label}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
