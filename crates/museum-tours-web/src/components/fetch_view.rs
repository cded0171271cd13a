//! Rendering helpers for load-on-mount page data

use super::{use_toast, ErrorFallback};
use leptos::prelude::*;
use museum_tours_types::FetchState;

/// Current state of a page resource; `Loading` until it resolves
pub fn resource_state<T: Clone + 'static>(resource: LocalResource<FetchState<T>>) -> FetchState<T> {
    resource
        .get()
        .map(|state| (*state).clone())
        .unwrap_or_default()
}

/// Render a fetch state: spinner, failure panel, or the ready view
pub fn fetch_view<T>(state: FetchState<T>, ready: impl FnOnce(T) -> AnyView) -> AnyView {
    match state {
        FetchState::Loading => view! {
            <div class="loading">
                <div class="spinner" aria-label="Loading"></div>
            </div>
        }
        .into_any(),
        FetchState::Ready(data) => ready(data),
        FetchState::Failed(error) => view! { <ErrorFallback error=error /> }.into_any(),
    }
}

/// Raise a toast once when the resource fails
pub fn toast_on_failure<T: Clone + 'static>(
    resource: LocalResource<FetchState<T>>,
    message: &'static str,
) {
    let toast = use_toast();

    Effect::new(move |_| {
        if let FetchState::Failed(error) = resource_state(resource) {
            leptos::logging::error!("{}: {}", message, error);
            toast.error(message.to_string());
        }
    });
}
