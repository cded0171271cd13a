//! Signup page component

use crate::api;
use crate::components::{use_toast, CredentialsForm};
use crate::routes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use museum_tours_types::Credentials;

#[component]
pub fn Signup() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |credentials: Credentials| {
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::signup(&credentials).await {
                Ok(profile) => {
                    toast.success(format!("Account created for {}. Please log in.", profile.email));
                    navigate(routes::LOGIN, Default::default());
                }
                Err(e) => {
                    // Server detail, e.g. "Email already registered"
                    set_error.set(Some(e.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Create an Account"</h1>
                <CredentialsForm submit_label="Sign up" pending error on_submit />
                <p class="auth-switch">
                    "Already registered? " <A href=routes::LOGIN>"Login"</A>
                </p>
            </div>
        </div>
    }
}
