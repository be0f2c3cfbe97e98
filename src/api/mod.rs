//! REST API Bindings
//!
//! `fetch` wrappers for the clinic backend, organized by resource.

mod appointments;
mod auth;
mod checkup_types;
mod health_facts;
mod specialists;
mod users;

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::error::{js_message, ApiError};

// Re-export all public items
pub use appointments::*;
pub use auth::*;
pub use checkup_types::*;
pub use health_facts::*;
pub use specialists::*;
pub use users::*;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Set the origin prefix for every request. Only the first call takes effect.
pub fn set_base_url(base: &str) {
    let _ = API_BASE.set(base.trim_end_matches('/').to_string());
}

pub fn url(path: &str) -> String {
    format!("{}{}", API_BASE.get().map(String::as_str).unwrap_or(""), path)
}

/// RFC 3986 unreserved characters stay as they are.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

enum Body {
    Empty,
    Json(String),
    Multipart(FormData),
}

async fn send(method: &str, path: &str, body: Body, fallback: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".into()))?;

    let init = RequestInit::new();
    init.set_method(method);
    let is_json = matches!(body, Body::Json(_));
    match body {
        Body::Empty => {}
        Body::Json(json) => init.set_body(&JsValue::from_str(&json)),
        // The browser picks the multipart boundary, so no Content-Type here.
        Body::Multipart(form) => init.set_body(&form),
    }

    let request = Request::new_with_str_and_init(&url(path), &init).map_err(ApiError::from_js)?;
    if is_json {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::from_js)?;
    }

    log::debug!("{} {}", method, path);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    let response: Response = response.dyn_into().map_err(ApiError::from_js)?;

    let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        let err = ApiError::from_status(response.status(), &text, fallback);
        log::warn!("{} {} failed with {}: {}", method, path, response.status(), err);
        return Err(err);
    }
    Ok(text)
}

async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    let text = send("GET", path, Body::Empty, fallback).await?;
    Ok(serde_json::from_str(&text)?)
}

async fn send_json<B: Serialize + ?Sized>(method: &str, path: &str, body: &B, fallback: &str) -> Result<String, ApiError> {
    let json = serde_json::to_string(body)?;
    send(method, path, Body::Json(json), fallback).await
}

async fn send_multipart(method: &str, path: &str, form: FormData, fallback: &str) -> Result<String, ApiError> {
    send(method, path, Body::Multipart(form), fallback).await
}

async fn delete(path: &str, fallback: &str) -> Result<(), ApiError> {
    send("DELETE", path, Body::Empty, fallback).await.map(|_| ())
}

/// Multipart body from text fields plus an optional `image` file part.
fn build_form_data(fields: &[(&str, String)], image: Option<&web_sys::File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(ApiError::from_js)?;
    }
    if let Some(file) = image {
        log::debug!("attaching image {} ({} bytes)", file.name(), file.size());
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(ApiError::from_js)?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode("2026-10-14"), "2026-10-14");
        assert_eq!(encode("09:30"), "09%3A30");
        assert_eq!(encode("a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_url_without_base_is_relative() {
        assert_eq!(url("/api/users"), "/api/users");
    }
}
