//! Header component

use crate::components::use_toast;
use crate::routes;
use crate::session_hook::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Header with home link and the visitor's sign-in state
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = session.sign_out() {
            leptos::logging::warn!("Failed to clear stored token: {}", e);
        }
        toast.info("You have been logged out.".to_string());
        navigate(routes::HOME, Default::default());
    };

    view! {
        <header class="header">
            <div class="header-content">
                <A href=routes::HOME attr:class="logo">
                    <span class="logo-icon">"🏛"</span>
                    <span class="logo-text">"Museum Thematic Tours"</span>
                </A>

                <div class="header-session">
                    {move || match session.state().email() {
                        Some(email) => view! {
                            <span class="header-user">{email.to_string()}</span>
                            <button class="btn btn-ghost" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        }
                            .into_any(),
                        None => view! {
                            <A href=routes::LOGIN attr:class="btn btn-primary">"Login"</A>
                        }
                            .into_any(),
                    }}
                </div>
            </div>
        </header>
    }
}
