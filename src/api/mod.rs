//! REST API Client
//!
//! Thin wrappers over the tracker backend, organized by resource. Every
//! failure is converted into [`ApiError`] at the call site; there are no
//! retries and no cancellation.

mod auth;
mod categories;
mod items;
mod notifications;
mod purchases;

// Re-export all public items
pub use auth::*;
pub use categories::*;
pub use items::*;
pub use notifications::*;
pub use purchases::*;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Session;

/// Base URL of the tracker API
const API_BASE: &str = "http://localhost:8000";

/// Everything that can go wrong talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Bearer-token HTTP client.
///
/// Cheap to clone; screens build one per call from the current session
/// context rather than holding a long-lived copy.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(session: Option<&Session>) -> Self {
        Self::with_base_url(session, API_BASE.to_string())
    }

    pub fn with_base_url(session: Option<&Session>, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: session.map(|s| s.token.clone()),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        decode(response).await
    }

    /// PUT with no request body, response body discarded.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<()> {
        let response = self.request(Method::PUT, path).send().await?;
        check(response).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        check(response).await.map(|_| ())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = check(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Map non-success statuses onto the error taxonomy, surfacing the server's
/// `detail` message when the body carries one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| detail_message(&body));
    Err(match status.as_u16() {
        401 => ApiError::Unauthorized,
        400 | 422 => {
            ApiError::Validation(detail.unwrap_or_else(|| "Validation failed".to_string()))
        }
        404 => ApiError::NotFound,
        _ => ApiError::Server(detail.unwrap_or_else(|| format!("Status {}", status))),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract a human-readable message from an error body. The backend sends
/// `detail` either as a plain string or, for field validation, as an array
/// of objects each carrying a `msg`.
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(msg) => Some(msg),
        serde_json::Value::Array(errors) => errors
            .first()
            .and_then(|e| e.get("msg"))
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_plain_string() {
        let body = r#"{"detail": "This username is already taken"}"#;
        assert_eq!(
            detail_message(body),
            Some("This username is already taken".to_string())
        );
    }

    #[test]
    fn test_detail_message_field_errors() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error.email"}]}"#;
        assert_eq!(
            detail_message(body),
            Some("value is not a valid email address".to_string())
        );
    }

    #[test]
    fn test_detail_message_absent() {
        assert_eq!(detail_message("not json"), None);
        assert_eq!(detail_message(r#"{"detail": 5}"#), None);
        assert_eq!(detail_message(r#"{"other": "x"}"#), None);
    }
}
