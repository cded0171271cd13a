//! First-visit welcome modal

use leptos::prelude::*;

/// Onboarding steps as (title, hint)
const STEPS: [(&str, &str); 3] = [
    ("1. Choose a Theme", "Select a topic that interests you."),
    ("2. Pick a Tour Size", "Decide how many objects you want to see."),
    ("3. Follow the Map", "Enjoy your custom-made itinerary!"),
];

/// Welcome modal
///
/// Closing it by any means (overlay, ×, "Get Started") counts as seen.
#[component]
pub fn WelcomeModal(on_close: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div
                class="modal-content welcome-modal"
                role="dialog"
                aria-modal="true"
                on:click=move |e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h2>"Welcome to the Museum!"</h2>
                    <button class="modal-close" on:click=move |_| on_close() aria-label="Close">
                        "×"
                    </button>
                </div>

                <div class="modal-body">
                    <p class="welcome-intro">
                        "Discover the collection with your own personalized tour in three simple steps."
                    </p>
                    <ol class="welcome-steps">
                        {STEPS
                            .iter()
                            .map(|&(title, hint)| {
                                view! {
                                    <li class="welcome-step">
                                        <h3>{title}</h3>
                                        <p>{hint}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>

                <div class="modal-footer">
                    <button class="btn btn-primary btn-block" on:click=move |_| on_close()>
                        "Get Started"
                    </button>
                </div>
            </div>
        </div>
    }
}
