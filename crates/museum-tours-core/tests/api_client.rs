//! Integration tests for ApiClient against a local stub backend

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use museum_tours_core::types::{
    logout, probe_session, ApiError, Credentials, FixtureCatalog, MemorySessionStore,
    SessionState, TourSize,
};
use museum_tours_core::ApiClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

type Catalog = Arc<FixtureCatalog>;

fn not_found(detail: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail })))
}

async fn themes(State(catalog): State<Catalog>) -> Json<Value> {
    Json(json!(catalog.themes()))
}

async fn theme(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    catalog
        .theme(&id)
        .map(|t| Json(json!(t)))
        .ok_or_else(|| not_found("Theme not found"))
}

async fn object(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    catalog
        .object(&id)
        .map(|o| Json(json!(o)))
        .ok_or_else(|| not_found("Object not found"))
}

async fn tour(
    State(catalog): State<Catalog>,
    Path((theme_id, size)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let size: TourSize = size
        .parse()
        .map_err(|_| not_found("Tour configuration not found"))?;
    Ok(Json(json!(catalog.tour_objects(&theme_id, size))))
}

async fn signup(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@museum.org" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Email already registered" })),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(json!({ "id": "u1", "email": body["email"] })),
        )
    }
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "visitor@museum.org" && body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({ "access_token": "good-token", "token_type": "bearer" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect email or password" })),
        )
    }
}

async fn me(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer good-token") => Ok(Json(json!({ "id": "u1", "email": "visitor@museum.org" }))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Start the stub on an ephemeral port, return its API base URL
async fn spawn_backend() -> String {
    let catalog = Arc::new(FixtureCatalog::builtin());
    let api = Router::new()
        .route("/themes", get(themes))
        .route("/themes/{id}", get(theme))
        .route("/objects/{id}", get(object))
        .route("/tours/{theme_id}/{size}", get(tour))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/users/me", get(me))
        .with_state(catalog);

    serve(api).await
}

/// A backend that answers 200 with bodies of the wrong shape
async fn spawn_garbled_backend() -> String {
    let api = Router::new()
        .route("/themes", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/objects/{id}",
            get(|| async { Json(json!({ "id": "obj-01", "title": 42 })) }),
        );

    serve(api).await
}

async fn serve(api: Router) -> String {
    let app = Router::new().nest("/api/v1", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/v1", addr)
}

#[tokio::test]
async fn test_fetch_themes() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let themes = client.fetch_themes().await.unwrap();
    assert_eq!(themes.len(), 4);
    assert_eq!(themes[0].id, "roman-empire");
}

#[tokio::test]
async fn test_fetch_tour_keeps_order() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let objects = client
        .fetch_tour("roman-empire", TourSize::Small)
        .await
        .unwrap();

    let titles: Vec<_> = objects.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Legionary Helmet", "Bust of Augustus"]);
}

#[tokio::test]
async fn test_missing_theme_is_status_error() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let err = client.fetch_theme("atlantis").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Failed to fetch theme: Not Found");
}

#[tokio::test]
async fn test_fetch_object() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let object = client.fetch_object("obj-01").await.unwrap();

    assert_eq!(object.title, "Legionary Helmet");
    assert!(object.belongs_to("roman-empire"));
}

#[tokio::test]
async fn test_missing_object_is_status_error() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let err = client.fetch_object("obj-999").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Failed to fetch object: Not Found");
}

#[tokio::test]
async fn test_login_returns_token() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let token = client
        .login(&Credentials::new("visitor@museum.org", "secret"))
        .await
        .unwrap();

    assert_eq!(token.access_token, "good-token");
    assert_eq!(token.token_type, "bearer");

    let profile = client.whoami(&token.access_token).await.unwrap();
    assert_eq!(profile.email, "visitor@museum.org");
}

#[tokio::test]
async fn test_login_rejection_surfaces_server_detail() {
    let client = ApiClient::new(spawn_backend().await).unwrap();
    let err = client
        .login(&Credentials::new("visitor@museum.org", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Incorrect email or password");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let client = ApiClient::new(spawn_garbled_backend().await).unwrap();

    let err = client.fetch_themes().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { context: "fetch themes", .. }));

    let err = client.fetch_object("obj-01").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { context: "fetch object", .. }));
    assert!(err.to_string().starts_with("Failed to fetch object: invalid response body"));
}

#[tokio::test]
async fn test_signup_surfaces_server_detail() {
    let client = ApiClient::new(spawn_backend().await).unwrap();

    let created = client
        .signup(&Credentials::new("new@museum.org", "secret"))
        .await
        .unwrap();
    assert_eq!(created.email, "new@museum.org");

    let err = client
        .signup(&Credentials::new("taken@museum.org", "secret"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn test_whoami_probe_with_real_client() {
    let client = ApiClient::new(spawn_backend().await).unwrap();

    let store = MemorySessionStore::with_token("good-token");
    let state = probe_session(&store, |token| {
        let client = client.clone();
        async move { client.whoami(&token).await }
    })
    .await;
    assert_eq!(state.email(), Some("visitor@museum.org"));

    let stale = MemorySessionStore::with_token("stale-token");
    let state = probe_session(&stale, |token| {
        let client = client.clone();
        async move { client.whoami(&token).await }
    })
    .await;
    assert_eq!(state, SessionState::LoggedOut);
    assert!(museum_tours_core::types::SessionStore::token(&stale).is_none());

    assert_eq!(logout(&store).unwrap(), SessionState::LoggedOut);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}/api/v1", addr)).unwrap();
    let err = client.fetch_themes().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}
