//! Fixture dev server using Axum
//!
//! Answers the same `/api/v1` read endpoints as the real backend, from a
//! [`FixtureCatalog`]. Auth endpoints are not served.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use museum_tours_types::{FixtureCatalog, TourSize};
use serde_json::json;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

type Catalog = Arc<FixtureCatalog>;

/// Create the dev server router
pub fn create_router(catalog: Catalog) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/themes", get(themes_handler))
        .route("/themes/{id}", get(theme_handler))
        .route("/objects/{id}", get(object_handler))
        .route("/tours/{theme_id}/{size}", get(tour_handler))
        .route("/healthz", get(health_handler));

    Router::new()
        .nest("/api/v1", api)
        .layer(cors)
        .with_state(catalog)
}

/// Serve the compiled SPA from `dist`; unknown paths fall back to
/// `index.html` so client-side routes survive a reload
pub fn with_static_files(router: Router, dist: &FsPath) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    router.fallback_service(ServeDir::new(dist).fallback(index))
}

/// Placeholder page used when the frontend has not been built
pub fn with_build_placeholder(router: Router) -> Router {
    router.route("/", get(placeholder_handler))
}

/// 404 with the backend's `{"detail": ...}` body
fn not_found(detail: &'static str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
}

async fn themes_handler(State(catalog): State<Catalog>) -> Response {
    Json(catalog.themes()).into_response()
}

async fn theme_handler(State(catalog): State<Catalog>, Path(id): Path<String>) -> Response {
    match catalog.theme(&id) {
        Some(theme) => Json(theme).into_response(),
        None => not_found("Theme not found"),
    }
}

async fn object_handler(State(catalog): State<Catalog>, Path(id): Path<String>) -> Response {
    match catalog.object(&id) {
        Some(object) => Json(object).into_response(),
        None => not_found("Object not found"),
    }
}

async fn tour_handler(
    State(catalog): State<Catalog>,
    Path((theme_id, size)): Path<(String, String)>,
) -> Response {
    // An unknown size is reported like a missing tour
    let Ok(size) = size.parse::<TourSize>() else {
        return not_found("Tour configuration not found");
    };

    if catalog.tour(&theme_id, size).is_none() {
        return not_found("Tour configuration not found");
    }

    let objects = catalog.tour_objects(&theme_id, size);
    debug!(theme_id = %theme_id, size = %size, objects = objects.len(), "Tour resolved");
    Json(objects).into_response()
}

async fn health_handler(State(catalog): State<Catalog>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "themes": catalog.themes().len(),
        "objects": catalog.objects().len(),
        "tours": catalog.tours().len(),
    }))
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Museum Thematic Tours - Build Required</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f9fafb;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>Museum Thematic Tours - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before it can be served.</p>
        <ol>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/museum-tours-web && MUSEUM_TOURS_API_URL=http://127.0.0.1:3333/api/v1 trunk build --release</code></li>
            <li>Restart: <code>museum-tours serve --dist crates/museum-tours-web/dist</code></li>
        </ol>
        <p><strong>API endpoints (available now):</strong></p>
        <ul>
            <li><a href="/api/v1/themes">/api/v1/themes</a></li>
            <li><a href="/api/v1/tours/roman-empire/Small">/api/v1/tours/roman-empire/Small</a></li>
            <li><a href="/api/v1/healthz">/api/v1/healthz</a></li>
        </ul>
    </div>
</body>
</html>"#,
    )
}
