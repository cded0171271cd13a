//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{EmptyState, Layout, ToastProvider};
use crate::pages::{Index, Login, ObjectDetail, Signup, ThemeDetail, Tour};
use crate::session_hook::SessionProvider;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <SessionProvider>
                <Router>
                    <Layout>
                        <Routes fallback=|| view! {
                            <EmptyState
                                title="Page not found"
                                description="This part of the museum does not exist."
                            />
                        }>
                            <Route path=path!("/") view=Index />
                            <Route path=path!("/theme/:theme_id") view=ThemeDetail />
                            <Route path=path!("/tour/:theme_id/:size") view=Tour />
                            <Route path=path!("/object/:object_id") view=ObjectDetail />
                            <Route path=path!("/login") view=Login />
                            <Route path=path!("/signup") view=Signup />
                        </Routes>
                    </Layout>
                </Router>
            </SessionProvider>
        </ToastProvider>
    }
}
