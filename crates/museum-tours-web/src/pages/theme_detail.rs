//! Theme detail page component - tour size picker

use crate::api::fetch_theme;
use crate::components::{fetch_view, resource_state, toast_on_failure};
use crate::routes;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use museum_tours_types::{FetchState, Theme, TourSize};

#[component]
pub fn ThemeDetail() -> impl IntoView {
    let params = use_params_map();
    let theme_id = move || params.read().get("theme_id").unwrap_or_default();

    let theme = LocalResource::new(move || {
        let id = theme_id();
        async move { FetchState::from_result(fetch_theme(&id).await) }
    });
    toast_on_failure(theme, "Failed to load theme details.");

    view! {
        <div class="page theme-page">
            <Suspense fallback=|| view! { <div class="loading">"Loading theme..."</div> }>
                {move || {
                    fetch_view(
                        resource_state(theme),
                        |theme| view! { <SizePicker theme=theme /> }.into_any(),
                    )
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn SizePicker(theme: Theme) -> impl IntoView {
    let links = TourSize::ALL
        .iter()
        .map(|&size| {
            view! {
                <A href=routes::tour(&theme.id, size) attr:class="btn btn-size">
                    {size.as_str()}
                </A>
            }
        })
        .collect_view();

    view! {
        <A href=routes::HOME attr:class="btn btn-ghost back-link">"← Back to Themes"</A>
        <div class="page-header">
            <h1 class="page-title">{theme.name}</h1>
            <p class="page-subtitle">{theme.description}</p>
        </div>

        <section class="card">
            <h2 class="card-title">"Choose Your Tour Size"</h2>
            <p class="card-description">"Select how many objects you'd like to see."</p>
            <div class="size-grid">{links}</div>
        </section>
    }
}
