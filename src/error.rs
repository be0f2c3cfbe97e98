//! Error Types
//!
//! Failures at the network boundary. Every one of them ends up as a
//! transient notification; none is fatal to the page.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Response arrived but was not ok
    #[error("{message}")]
    Http { status: u16, message: String },

    /// fetch() itself rejected
    #[error("Connection error: {0}")]
    Network(String),

    /// Body was not the JSON we expected
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// A browser API we rely on is missing or threw
    #[error("Browser error: {0}")]
    Browser(String),
}

/// `{"error": "...", "field": "..."}` bodies sent by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build an HTTP error, preferring the body's `error` field over `fallback`.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Http { status, message }
    }

    pub fn from_js(value: JsValue) -> Self {
        Self::Browser(js_message(&value))
    }

    /// Text for a notification: the server's message when it sent one.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Best-effort message from a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_status(400, r#"{"error": "Email already in use", "field": "email"}"#, "Failed to add user");
        assert_eq!(err, ApiError::Http { status: 400, message: "Email already in use".into() });
        assert_eq!(err.notice("ignored"), "Email already in use");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        let err = ApiError::from_status(500, "<html>oops</html>", "Failed to delete specialist");
        assert_eq!(err.to_string(), "Failed to delete specialist");

        let err = ApiError::from_status(404, r#"{"error": ""}"#, "Not found");
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_non_http_errors_use_fallback_notice() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.notice("Failed to load users. Please try again."), "Failed to load users. Please try again.");
    }
}
