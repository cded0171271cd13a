//! Online/offline hook backing the offline banner

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use museum_tours_types::NetworkStatus;

/// Leptos hook for browser connectivity
///
/// Starts from `navigator.onLine` and follows the window `online` /
/// `offline` events. Listeners are removed when the owner is disposed.
pub fn use_network_status() -> ReadSignal<NetworkStatus> {
    let initial = NetworkStatus::from_online(window().navigator().on_line());
    let (status, set_status) = signal(initial);

    let on_change = move |event: web_sys::Event| {
        let event_type = event.type_();
        leptos::logging::log!("Network event: {}", event_type);
        set_status.update(|status| *status = status.on_event(&event_type));
    };

    let online = window_event_listener(ev::online, on_change);
    let offline = window_event_listener(ev::offline, on_change);

    on_cleanup(move || {
        online.remove();
        offline.remove();
    });

    status
}
