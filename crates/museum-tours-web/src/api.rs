//! Browser API client for the museum backend

use gloo_net::http::{Request, RequestBuilder, Response};
use museum_tours_types::{
    ApiError, AuthToken, Credentials, Endpoint, MuseumObject, Theme, TourSize, UserProfile,
    DEFAULT_API_BASE_URL,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend base URL, fixed at build time through `MUSEUM_TOURS_API_URL`
pub fn api_base_url() -> &'static str {
    option_env!("MUSEUM_TOURS_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Fetch all themes
pub async fn fetch_themes() -> Result<Vec<Theme>, ApiError> {
    get_json(Endpoint::Themes, None).await
}

/// Fetch one theme by id
pub async fn fetch_theme(id: &str) -> Result<Theme, ApiError> {
    get_json(Endpoint::Theme(id.to_string()), None).await
}

/// Fetch one object by id
pub async fn fetch_object(id: &str) -> Result<MuseumObject, ApiError> {
    get_json(Endpoint::Object(id.to_string()), None).await
}

/// Fetch the resolved objects of a tour, in itinerary order
pub async fn fetch_tour(theme_id: &str, size: TourSize) -> Result<Vec<MuseumObject>, ApiError> {
    let endpoint = Endpoint::Tour {
        theme_id: theme_id.to_string(),
        size,
    };
    get_json(endpoint, None).await
}

pub async fn signup(credentials: &Credentials) -> Result<UserProfile, ApiError> {
    post_json(Endpoint::Signup, credentials).await
}

pub async fn login(credentials: &Credentials) -> Result<AuthToken, ApiError> {
    post_json(Endpoint::Login, credentials).await
}

/// Profile behind a bearer token
pub async fn whoami(token: &str) -> Result<UserProfile, ApiError> {
    get_json(Endpoint::Whoami, Some(token)).await
}

async fn get_json<T: DeserializeOwned>(
    endpoint: Endpoint,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut request = Request::get(&endpoint.url(api_base_url()));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    send(&endpoint, request).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: Endpoint,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(&endpoint.url(api_base_url()))
        .json(body)
        .map_err(|e| ApiError::encode(&endpoint, e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    read_response(&endpoint, response).await
}

async fn send<T: DeserializeOwned>(
    endpoint: &Endpoint,
    request: RequestBuilder,
) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    read_response(endpoint, response).await
}

async fn read_response<T: DeserializeOwned>(
    endpoint: &Endpoint,
    response: Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        leptos::logging::warn!("{} {} -> {}", endpoint.method(), endpoint.path(), status);
        return Err(ApiError::from_status(endpoint, status, &status_text, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(endpoint, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_absolute() {
        let base = api_base_url();
        assert!(base.starts_with("http://") || base.starts_with("https://"));
        assert!(Endpoint::Themes.url(base).ends_with("/themes"));
    }
}
