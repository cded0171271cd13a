//! Index page component - theme list and first-visit welcome

use crate::api::fetch_themes;
use crate::components::{fetch_view, resource_state, toast_on_failure, WelcomeModal};
use crate::routes;
use crate::storage::LocalStorageSessionStore;
use leptos::prelude::*;
use leptos_router::components::A;
use museum_tours_types::{should_show_welcome, FetchState, SessionStore, Theme};

#[component]
pub fn Index() -> impl IntoView {
    let themes = LocalResource::new(move || async move { FetchState::from_result(fetch_themes().await) });
    toast_on_failure(themes, "Failed to load themes. Please try again later.");

    let (show_welcome, set_show_welcome) = signal(should_show_welcome(&LocalStorageSessionStore));
    let close_welcome = move || {
        if let Err(e) = LocalStorageSessionStore.mark_visited() {
            leptos::logging::warn!("Failed to remember first visit: {}", e);
        }
        set_show_welcome.set(false);
    };

    view! {
        <div class="page index-page">
            <Show when=move || show_welcome.get()>
                <WelcomeModal on_close=close_welcome />
            </Show>

            <div class="page-header page-header--centered">
                <h1 class="page-title">"Discover the Collection"</h1>
                <p class="page-subtitle">"Select a theme to begin your personalized tour."</p>
            </div>

            <Suspense fallback=|| view! { <div class="loading">"Loading themes..."</div> }>
                {move || {
                    fetch_view(
                        resource_state(themes),
                        |themes| view! { <ThemeGrid themes=themes /> }.into_any(),
                    )
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ThemeGrid(themes: Vec<Theme>) -> impl IntoView {
    view! {
        <div class="theme-grid">
            {themes
                .into_iter()
                .map(|theme| {
                    view! {
                        <A href=routes::theme(&theme.id) attr:class="theme-card">
                            <img class="theme-card-image" src=theme.image alt=theme.name.clone() />
                            <h2 class="theme-card-title">{theme.name}</h2>
                            <p class="theme-card-description">{theme.description}</p>
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}
