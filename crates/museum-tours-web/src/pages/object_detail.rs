//! Object detail page component

use crate::api::fetch_object;
use crate::components::{fetch_view, resource_state, toast_on_failure};
use crate::routes;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use museum_tours_types::{FetchState, MuseumObject};

#[component]
pub fn ObjectDetail() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let object_id = move || params.read().get("object_id").unwrap_or_default();
    let back = move || routes::safe_back(query.read().get("back"));

    let object = LocalResource::new(move || {
        let id = object_id();
        async move { FetchState::from_result(fetch_object(&id).await) }
    });
    toast_on_failure(object, "Could not load object details.");

    view! {
        <div class="page object-page">
            <Suspense fallback=|| view! { <div class="loading">"Loading object..."</div> }>
                {move || {
                    fetch_view(
                        resource_state(object),
                        move |object| view! { <ObjectView object=object back=back() /> }.into_any(),
                    )
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ObjectView(object: MuseumObject, back: Option<String>) -> impl IntoView {
    let navigate = use_navigate();

    // Return to the tour we came from, or one step back in history
    let go_back = move |_: leptos::ev::MouseEvent| match &back {
        Some(path) => navigate(path, Default::default()),
        None => {
            if let Err(e) = window().history().and_then(|history| history.back()) {
                leptos::logging::warn!("History navigation failed: {:?}", e);
            }
        }
    };

    view! {
        <button class="btn btn-ghost back-link" on:click=go_back>"← Back"</button>
        <div class="object-detail">
            <img class="object-image" src=object.image alt=object.title.clone() />
            <div class="object-info">
                <h1 class="page-title">{object.title}</h1>
                <p class="object-location">{object.gallery_location}</p>
                <p class="object-background">{object.contextual_background}</p>
            </div>
        </div>
    }
}
