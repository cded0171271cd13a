//! Email/password form shared by the login and signup pages

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use museum_tours_types::Credentials;

#[component]
pub fn CredentialsForm(
    /// Submit button label
    submit_label: &'static str,
    /// True while the request is in flight
    pending: ReadSignal<bool>,
    /// Last failure, shown above the button
    error: ReadSignal<Option<String>>,
    on_submit: impl Fn(Credentials) + 'static,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            return;
        }
        on_submit(Credentials::new(email, password));
    };

    view! {
        <form class="credentials-form" on:submit=submit>
            <label class="form-field">
                <span>"Email"</span>
                <input
                    type="email"
                    required
                    autocomplete="email"
                    prop:value=email
                    on:input=move |e| set_email.set(event_target_value(&e))
                />
            </label>
            <label class="form-field">
                <span>"Password"</span>
                <input
                    type="password"
                    required
                    prop:value=password
                    on:input=move |e| set_password.set(event_target_value(&e))
                />
            </label>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <button type="submit" class="btn btn-primary btn-block" disabled=move || pending.get()>
                {move || if pending.get() { "Please wait..." } else { submit_label }}
            </button>
        </form>
    }
}
