//! Native REST client for the museum backend
//!
//! One request per call: no retries, no caching. Non-2xx responses and
//! transport failures come back as [`ApiError`].

use crate::error::CoreError;
use museum_tours_types::{
    ApiError, AuthToken, Credentials, Endpoint, MuseumObject, Theme, TourSize, UserProfile,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("museum-tours/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| CoreError::HttpClient { source })?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All themes, backend order
    pub async fn fetch_themes(&self) -> Result<Vec<Theme>, ApiError> {
        self.get(&Endpoint::Themes, None).await
    }

    pub async fn fetch_theme(&self, id: &str) -> Result<Theme, ApiError> {
        self.get(&Endpoint::Theme(id.to_string()), None).await
    }

    pub async fn fetch_object(&self, id: &str) -> Result<MuseumObject, ApiError> {
        self.get(&Endpoint::Object(id.to_string()), None).await
    }

    /// Resolved tour objects, in itinerary order
    pub async fn fetch_tour(
        &self,
        theme_id: &str,
        size: TourSize,
    ) -> Result<Vec<MuseumObject>, ApiError> {
        let endpoint = Endpoint::Tour {
            theme_id: theme_id.to_string(),
            size,
        };
        self.get(&endpoint, None).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        self.post(&Endpoint::Signup, credentials).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.post(&Endpoint::Login, credentials).await
    }

    /// Profile for a bearer token
    pub async fn whoami(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get(&Endpoint::Whoami, Some(token)).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(endpoint.url(&self.base_url));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send(endpoint, request).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(endpoint.url(&self.base_url)).json(body);
        self.send(endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(method = endpoint.method(), path = %endpoint.path(), "API request");

        let response = request.send().await.map_err(|e| {
            warn!(path = %endpoint.path(), error = %e, "API request failed");
            ApiError::network(e.to_string())
        })?;

        read_response(endpoint, response).await
    }
}

async fn read_response<T: DeserializeOwned>(
    endpoint: &Endpoint,
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or("Unknown Status");
        // Body is only used for the optional detail message
        let body = response.text().await.unwrap_or_default();
        warn!(path = %endpoint.path(), status = status.as_u16(), "API returned error status");
        return Err(ApiError::from_status(
            endpoint,
            status.as_u16(),
            status_text,
            &body,
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(endpoint, e.to_string()))
}
