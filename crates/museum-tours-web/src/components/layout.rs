//! Page chrome: offline banner, header, content area

use super::{use_toast, Header};
use crate::network_hook::use_network_status;
use crate::session_hook::use_session;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use museum_tours_types::NetworkStatus;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let network = use_network_status();
    let toast = use_toast();
    let session = use_session();
    let location = use_location();

    // Re-validate the stored token on every page visit
    Effect::new(move |_| {
        location.pathname.track();
        session.probe();
    });

    // Announce transitions only, not the initial state
    Effect::new(move |previous: Option<NetworkStatus>| {
        let current = network.get();
        if previous.is_some_and(|p| p != current) {
            match current {
                NetworkStatus::Offline => toast.warning("Connection lost.".to_string()),
                NetworkStatus::Online => toast.info("Back online.".to_string()),
            }
        }
        current
    });

    view! {
        <div class="app">
            {move || {
                network
                    .get()
                    .banner()
                    .map(|text| view! { <div class="offline-banner" role="alert">{text}</div> })
            }}
            <Header />
            <main class="content">{children()}</main>
        </div>
    }
}
