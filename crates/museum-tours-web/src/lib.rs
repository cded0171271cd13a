//! museum-tours-web - Web frontend for museum-tours using Leptos, plus the
//! fixture dev server (feature `ssr`)

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod network_hook;
pub mod pages;
pub mod routes;
pub mod session_hook;
pub mod storage;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;

#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
mod server {
    use crate::router::{create_router, with_build_placeholder, with_static_files};
    use anyhow::Result;
    use museum_tours_types::FixtureCatalog;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    /// Run the fixture dev server
    ///
    /// Serves the API from `catalog` and, when `dist` exists, the compiled SPA.
    pub async fn run(catalog: Arc<FixtureCatalog>, port: u16, dist: Option<PathBuf>) -> Result<()> {
        let router = create_router(catalog);

        let router = match dist {
            Some(dir) if dir.is_dir() => {
                info!(dist = %dir.display(), "Serving compiled frontend");
                with_static_files(router, &dir)
            }
            Some(dir) => {
                warn!(dist = %dir.display(), "Frontend directory not found, API only");
                with_build_placeholder(router)
            }
            None => with_build_placeholder(router),
        };

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Dev server listening on http://{}", addr);
        println!("Dev server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use server::run;
