//! Schematic floor plan with numbered tour pins

use crate::routes;
use leptos::prelude::*;
use leptos_router::components::A;
use museum_tours_types::MuseumObject;

/// Room label positions on the 800x600 plan
const ROOMS: [(&str, &str, &str); 6] = [
    ("Room 3", "100", "200"),
    ("Room 4", "350", "200"),
    ("Room 8", "650", "200"),
    ("Room 9", "650", "300"),
    ("Room 10", "200", "500"),
    ("Room 12", "600", "500"),
];

/// Gallery dividers as (x1, y1, x2, y2)
const DIVIDERS: [(&str, &str, &str, &str); 4] = [
    ("200", "0", "200", "400"),
    ("500", "0", "500", "400"),
    ("0", "400", "800", "400"),
    ("400", "400", "400", "600"),
];

/// Museum map: one pin per object, numbered in itinerary order
///
/// Pins are placed with the objects' pre-computed percentage offsets and
/// link to the object page. `back` is handed on as the return path.
#[component]
pub fn MuseumMap(
    objects: Vec<MuseumObject>,
    #[prop(optional, into)] back: Option<String>,
) -> impl IntoView {
    let pins = objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            let href = routes::object(&object.id, back.as_deref());
            view! {
                <A href=href>
                    <div
                        class="map-pin"
                        style=object.map_position.style()
                        title=object.pin_label()
                    >
                        {index + 1}
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <div class="museum-map">
            <svg viewBox="0 0 800 600" class="museum-map-plan">
                <rect
                    x="1"
                    y="1"
                    width="798"
                    height="598"
                    fill="#f7fafc"
                    stroke="#e2e8f0"
                    stroke-width="2"
                />
                {DIVIDERS
                    .iter()
                    .map(|&(x1, y1, x2, y2)| {
                        view! { <line x1=x1 y1=y1 x2=x2 y2=y2 stroke="#cbd5e0" stroke-width="2" /> }
                    })
                    .collect_view()}
                {ROOMS
                    .iter()
                    .map(|&(label, x, y)| {
                        view! {
                            <text
                                x=x
                                y=y
                                font-family="sans-serif"
                                font-size="16"
                                fill="#a0aec0"
                                text-anchor="middle"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            {pins}
        </div>
    }
}
