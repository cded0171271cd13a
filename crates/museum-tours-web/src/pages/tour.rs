//! Tour page component - itinerary list and museum map (2 tabs)

use crate::api::{fetch_theme, fetch_tour};
use crate::components::{fetch_view, resource_state, toast_on_failure, MuseumMap};
use crate::routes;
use futures::future::join;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use museum_tours_types::{ApiError, FetchState, MuseumObject, Theme, TourSize};

const TOUR_NOT_FOUND: &str = "Tour not found";

#[derive(Debug, Clone, Copy, PartialEq)]
enum TourTab {
    Itinerary,
    Map,
}

/// Everything the tour view needs, loaded together
#[derive(Debug, Clone)]
struct TourData {
    theme: Theme,
    size: TourSize,
    objects: Vec<MuseumObject>,
}

/// Fetch theme and tour concurrently; Ready only when both succeed and the
/// tour has at least one object
async fn load_tour(theme_id: String, size: Option<TourSize>) -> FetchState<TourData> {
    let Some(size) = size else {
        return FetchState::Failed(TOUR_NOT_FOUND.to_string());
    };

    let (theme, objects) = join(fetch_theme(&theme_id), fetch_tour(&theme_id, size)).await;
    assemble_tour(size, theme, objects)
}

fn assemble_tour(
    size: TourSize,
    theme: Result<Theme, ApiError>,
    objects: Result<Vec<MuseumObject>, ApiError>,
) -> FetchState<TourData> {
    FetchState::join(theme, objects)
        .require(|(_, objects)| !objects.is_empty(), TOUR_NOT_FOUND)
        .map(|(theme, objects)| TourData {
            theme,
            size,
            objects,
        })
}

#[component]
pub fn Tour() -> impl IntoView {
    let params = use_params_map();
    let theme_id = move || params.read().get("theme_id").unwrap_or_default();
    let size = move || {
        params
            .read()
            .get("size")
            .and_then(|s| s.parse::<TourSize>().ok())
    };

    let tour = LocalResource::new(move || load_tour(theme_id(), size()));
    toast_on_failure(tour, "Could not load tour details.");

    view! {
        <div class="page tour-page">
            <Suspense fallback=|| view! { <div class="loading">"Loading tour..."</div> }>
                {move || {
                    fetch_view(
                        resource_state(tour),
                        |data| view! { <TourView data=data /> }.into_any(),
                    )
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TourView(data: TourData) -> impl IntoView {
    let TourData {
        theme,
        size,
        objects,
    } = data;
    let active_tab = RwSignal::new(TourTab::Itinerary);
    let back = routes::tour(&theme.id, size);
    let tab_class = move |tab: TourTab| {
        if active_tab.get() == tab {
            "tour-tab tour-tab--active"
        } else {
            "tour-tab"
        }
    };

    let itinerary = view! { <Itinerary objects=objects.clone() back=back.clone() /> };
    let map = view! { <MuseumMap objects=objects back=back /> };

    view! {
        <A href=routes::theme(&theme.id) attr:class="btn btn-ghost back-link">
            "← Back to Size Selection"
        </A>
        <div class="page-header">
            <h1 class="page-title">{format!("{} Tour", theme.name)}</h1>
            <p class="page-subtitle">{format!("{} Itinerary", size)}</p>
        </div>

        <div class="tour-tabs">
            <button
                class=move || tab_class(TourTab::Itinerary)
                on:click=move |_| active_tab.set(TourTab::Itinerary)
            >
                "Itinerary"
            </button>
            <button
                class=move || tab_class(TourTab::Map)
                on:click=move |_| active_tab.set(TourTab::Map)
            >
                "Map"
            </button>
        </div>

        <section class="card" class:hidden=move || active_tab.get() != TourTab::Itinerary>
            <h2 class="card-title">"Suggested Route"</h2>
            {itinerary}
        </section>
        <section class="card" class:hidden=move || active_tab.get() != TourTab::Map>
            <h2 class="card-title">"Museum Map"</h2>
            {map}
        </section>
    }
}

#[component]
fn Itinerary(objects: Vec<MuseumObject>, back: String) -> impl IntoView {
    view! {
        <ol class="itinerary">
            {objects
                .into_iter()
                .enumerate()
                .map(|(index, object)| {
                    let href = routes::object(&object.id, Some(&back));
                    view! {
                        <li class="itinerary-stop">
                            <div class="itinerary-number">{index + 1}</div>
                            <div class="itinerary-body">
                                <h3>{object.title}</h3>
                                <p class="itinerary-location">{object.gallery_location}</p>
                                <p class="itinerary-description">{object.short_description}</p>
                                <A href=href attr:class="itinerary-link">"View Details"</A>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use museum_tours_types::FixtureCatalog;

    #[test]
    fn test_invalid_size_is_tour_not_found_without_request() {
        let state = block_on(load_tour("roman-empire".to_string(), None));
        assert_eq!(state.error(), Some(TOUR_NOT_FOUND));
    }

    #[test]
    fn test_ready_tour_carries_requested_size() {
        let catalog = FixtureCatalog::builtin();
        let theme = catalog.theme("ancient-egypt").cloned().unwrap();
        let objects = catalog.tour_objects("ancient-egypt", TourSize::Large);

        let state = assemble_tour(TourSize::Large, Ok(theme), Ok(objects));
        let data = state.ready().unwrap();

        assert_eq!(data.size, TourSize::Large);
        assert_eq!(data.theme.id, "ancient-egypt");
        assert_eq!(data.objects.len(), 3);
    }

    #[test]
    fn test_empty_tour_is_not_found() {
        let catalog = FixtureCatalog::builtin();
        let theme = catalog.theme("ancient-greece").cloned().unwrap();

        let state = assemble_tour(TourSize::Small, Ok(theme), Ok(Vec::new()));
        assert_eq!(state.error(), Some(TOUR_NOT_FOUND));
    }

    #[test]
    fn test_either_failure_fails_the_page() {
        let catalog = FixtureCatalog::builtin();
        let objects = catalog.tour_objects("roman-empire", TourSize::Small);

        let state = assemble_tour(
            TourSize::Small,
            Err(ApiError::network("offline")),
            Ok(objects),
        );
        assert_eq!(state.error(), Some("Network error: offline"));
    }
}
