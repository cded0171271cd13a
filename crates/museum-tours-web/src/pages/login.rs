//! Login page component

use crate::api;
use crate::components::{use_toast, CredentialsForm};
use crate::routes;
use crate::session_hook::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use museum_tours_types::Credentials;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |credentials: Credentials| {
        let navigate = navigate.clone();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(token) => {
                    if let Err(e) = session.sign_in(credentials.email.clone(), &token) {
                        leptos::logging::warn!("Token not persisted: {}", e);
                    }
                    toast.success(format!("Welcome back, {}!", credentials.email));
                    navigate(routes::HOME, Default::default());
                }
                Err(e) => {
                    leptos::logging::warn!("Login failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Login"</h1>
                <CredentialsForm submit_label="Login" pending error on_submit />
                <p class="auth-switch">
                    "No account yet? " <A href=routes::SIGNUP>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
