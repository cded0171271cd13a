//! REST contract shared by the native and browser API clients
//!
//! Both clients build their URLs from [`Endpoint`] and translate failures
//! into [`ApiError`], so a page or command never has to inspect raw HTTP.

use crate::models::TourSize;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://gentle-jackrabbit-twirl-backend.onrender.com/api/v1";

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Backend endpoints consumed by the clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Themes,
    Theme(String),
    Object(String),
    Tour { theme_id: String, size: TourSize },
    Signup,
    Login,
    Whoami,
}

impl Endpoint {
    /// Path relative to the API base URL, with segments percent-encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Themes => "/themes".to_string(),
            Endpoint::Theme(id) => format!("/themes/{}", encode_segment(id)),
            Endpoint::Object(id) => format!("/objects/{}", encode_segment(id)),
            Endpoint::Tour { theme_id, size } => {
                format!("/tours/{}/{}", encode_segment(theme_id), size)
            }
            Endpoint::Signup => "/auth/signup".to_string(),
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::Whoami => "/users/me".to_string(),
        }
    }

    /// Absolute URL against `base_url` (trailing slashes are ignored)
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::Signup | Endpoint::Login => "POST",
            _ => "GET",
        }
    }

    /// Verb phrase used in error messages ("Failed to <context>: ...")
    pub fn context(&self) -> &'static str {
        match self {
            Endpoint::Themes => "fetch themes",
            Endpoint::Theme(_) => "fetch theme",
            Endpoint::Object(_) => "fetch object",
            Endpoint::Tour { .. } => "fetch tour",
            Endpoint::Signup => "signup",
            Endpoint::Login => "login",
            Endpoint::Whoami => "fetch current user",
        }
    }

    /// Account endpoints surface the server's `detail` message on failure
    pub fn surfaces_detail(&self) -> bool {
        matches!(self, Endpoint::Signup | Endpoint::Login)
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Request body for signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Error body returned by the backend (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status
    #[error("{}", describe_status(.context, .status_text, .detail))]
    Status {
        context: &'static str,
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// The request body could not be serialized; nothing was sent
    #[error("Failed to {context}: invalid request body ({message})")]
    Encode {
        context: &'static str,
        message: String,
    },

    /// 2xx response whose body did not match the expected shape
    #[error("Failed to {context}: invalid response body ({message})")]
    Decode {
        context: &'static str,
        message: String,
    },

    /// Entity absent from a local data source
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },
}

fn describe_status(context: &str, status_text: &str, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Failed to {}: {}", context, status_text),
    }
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn encode(endpoint: &Endpoint, message: impl Into<String>) -> Self {
        ApiError::Encode {
            context: endpoint.context(),
            message: message.into(),
        }
    }

    pub fn decode(endpoint: &Endpoint, message: impl Into<String>) -> Self {
        ApiError::Decode {
            context: endpoint.context(),
            message: message.into(),
        }
    }

    /// Build a status error from a failed response.
    ///
    /// `body` is the raw response text; its `detail` field is kept only for
    /// endpoints that surface it. An unparseable body is not an error here.
    pub fn from_status(endpoint: &Endpoint, status: u16, status_text: &str, body: &str) -> Self {
        let detail = if endpoint.surfaces_detail() {
            serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.is_empty())
        } else {
            None
        };

        ApiError::Status {
            context: endpoint.context(),
            status,
            status_text: status_text.to_string(),
            detail,
        }
    }

    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. }) || self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Themes.path(), "/themes");
        assert_eq!(Endpoint::Theme("roman-empire".into()).path(), "/themes/roman-empire");
        assert_eq!(Endpoint::Object("obj-01".into()).path(), "/objects/obj-01");
        assert_eq!(
            Endpoint::Tour {
                theme_id: "roman-empire".into(),
                size: TourSize::Small
            }
            .path(),
            "/tours/roman-empire/Small"
        );
        assert_eq!(Endpoint::Whoami.path(), "/users/me");
        assert_eq!(Endpoint::Signup.method(), "POST");
        assert_eq!(Endpoint::Themes.method(), "GET");
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let url = Endpoint::Themes.url("http://localhost:3333/api/v1/");
        assert_eq!(url, "http://localhost:3333/api/v1/themes");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let path = Endpoint::Object("a/b c".into()).path();
        assert_eq!(path, "/objects/a%2Fb%20c");
    }

    #[test]
    fn test_read_failure_uses_status_text() {
        let err = ApiError::from_status(
            &Endpoint::Theme("nope".into()),
            404,
            "Not Found",
            r#"{"detail": "Theme not found"}"#,
        );
        assert_eq!(err.to_string(), "Failed to fetch theme: Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_signup_failure_prefers_server_detail() {
        let err = ApiError::from_status(
            &Endpoint::Signup,
            400,
            "Bad Request",
            r#"{"detail": "Email already registered"}"#,
        );
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_signup_failure_without_detail_falls_back() {
        let err = ApiError::from_status(&Endpoint::Signup, 500, "Internal Server Error", "oops");
        assert_eq!(err.to_string(), "Failed to signup: Internal Server Error");
    }

    #[test]
    fn test_encode_failure_is_not_a_network_error() {
        let err = ApiError::encode(&Endpoint::Login, "key must be a string");
        assert_eq!(
            err.to_string(),
            "Failed to login: invalid request body (key must be a string)"
        );
        assert!(!matches!(err, ApiError::Network { .. }));
        assert_eq!(err.status(), None);
    }
}
