//! Empty state component for unknown routes

use crate::routes;
use leptos::prelude::*;
use leptos_router::components::A;

/// Shown by the router fallback
#[component]
pub fn EmptyState(
    /// Heading (e.g., "Page not found")
    title: &'static str,
    /// One-line explanation
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Landmark icon (lucide-landmark)
                    <line x1="3" x2="21" y1="22" y2="22"/>
                    <line x1="6" x2="6" y1="18" y2="11"/>
                    <line x1="10" x2="10" y1="18" y2="11"/>
                    <line x1="14" x2="14" y1="18" y2="11"/>
                    <line x1="18" x2="18" y1="18" y2="11"/>
                    <polygon points="12 2 20 7 4 7"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            <div class="empty-state-actions">
                <A href=routes::HOME attr:class="btn btn-primary">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="m12 19-7-7 7-7"/>
                        <path d="M19 12H5"/>
                    </svg>
                    " Back to Themes"
                </A>
            </div>
        </div>
    }
}
