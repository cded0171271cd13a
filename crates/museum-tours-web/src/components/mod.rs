//! Leptos UI components

mod credentials_form;
mod empty_state;
mod error_boundary;
mod fetch_view;
mod header;
mod layout;
mod museum_map;
mod toast;
mod welcome_modal;

pub use credentials_form::CredentialsForm;
pub use empty_state::EmptyState;
pub use error_boundary::ErrorFallback;
pub use fetch_view::{fetch_view, resource_state, toast_on_failure};
pub use header::Header;
pub use layout::Layout;
pub use museum_map::MuseumMap;
pub use toast::{use_toast, Toast, ToastContext, ToastKind, ToastProvider};
pub use welcome_modal::WelcomeModal;
