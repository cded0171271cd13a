//! Toast notifications

use leptos::prelude::*;
use std::time::Duration;

/// Toast kind (styling and lifetime)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn title(&self) -> &'static str {
        match self {
            ToastKind::Info => "Notice",
            ToastKind::Success => "Done",
            ToastKind::Warning => "Warning",
            ToastKind::Error => "Error",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-destructive",
        }
    }

    /// Errors stay up longer than everything else
    pub fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Error => Duration::from_millis(5000),
            _ => Duration::from_millis(3000),
        }
    }
}

/// Single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

/// Global toast state
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<usize>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Push a toast and schedule its removal
    pub fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|toasts| toasts.retain(|t| t.id != id)),
            kind.lifetime(),
        );
    }

    pub fn info(&self, message: String) {
        self.show(ToastKind::Info, message);
    }

    pub fn success(&self, message: String) {
        self.show(ToastKind::Success, message);
    }

    pub fn warning(&self, message: String) {
        self.show(ToastKind::Warning, message);
    }

    pub fn error(&self, message: String) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast provider component (wraps app root)
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());

    view! {
        {children()}
        <ToastContainer />
    }
}

#[component]
fn ToastContainer() -> impl IntoView {
    let toast_context = use_toast();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toast_context.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toast_context = use_toast();
    let id = toast.id;

    view! {
        <div class=format!("toast {}", toast.kind.class())>
            <div class="toast-content">
                <strong class="toast-title">{toast.kind.title()}</strong>
                <span class="toast-message">{toast.message}</span>
            </div>
            <button
                class="toast-close"
                on:click=move |_| toast_context.dismiss(id)
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

/// Hook to access toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_outlive_others() {
        assert_eq!(ToastKind::Error.lifetime(), Duration::from_secs(5));
        assert_eq!(ToastKind::Info.lifetime(), Duration::from_secs(3));
        assert_eq!(ToastKind::Success.lifetime(), Duration::from_secs(3));
        assert_eq!(ToastKind::Warning.lifetime(), Duration::from_secs(3));
    }
}
