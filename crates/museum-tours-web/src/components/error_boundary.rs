//! Failure panel shown when a page cannot load its data

use crate::routes;
use leptos::prelude::*;
use leptos_router::components::A;

/// Error fallback component
///
/// Every page failure renders the same panel: the message and a way back to
/// the theme list. Nothing is retried automatically.
///
/// # Example
/// ```ignore
/// view! { <ErrorFallback error="Failed to fetch theme: Not Found" /> }
/// ```
#[component]
pub fn ErrorFallback(
    /// Error message to display
    #[prop(into)]
    error: String,
) -> impl IntoView {
    view! {
        <div class="error-boundary">
            <div class="error-boundary-content">
                <div class="error-boundary-icon">"⚠️"</div>
                <h2 class="error-boundary-message">{error}</h2>
                <A href=routes::HOME attr:class="btn btn-primary">
                    "Back to Themes"
                </A>
            </div>
        </div>
    }
}
