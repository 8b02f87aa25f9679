//! Backend HTTP Client
//!
//! Thin `fetch` wrappers over the REST backend, organized by resource.
//! Every call returns `Result<T, ApiError>`; pages decide how to show it.

mod auth;
mod menu;
mod daily_menu;
mod orders;
mod feedback;
mod tables;
mod dashboard;
mod public;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use smart_menu_core::config::resolve_base_url;

use crate::router;
use crate::storage;

// Re-export all public items
pub use auth::*;
pub use menu::*;
pub use daily_menu::*;
pub use orders::*;
pub use feedback::*;
pub use tables::*;
pub use dashboard::*;
pub use public::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Cannot reach the server: {0}")]
    Network(String),
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn js_error(e: JsValue) -> String {
    e.as_string()
        .or_else(|| js_sys::JSON::stringify(&e).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Message to show for a failed response: the body's `message` or `error`
/// field, else its `errors` list joined, else the raw body, else a generic
/// line with the status code.
pub fn server_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
        #[serde(default)]
        errors: Vec<serde_json::Value>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = [parsed.message, parsed.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
        {
            return msg;
        }
        // Plain strings, or field errors carrying `defaultMessage`
        let listed: Vec<String> = parsed
            .errors
            .iter()
            .filter_map(|e| match e {
                serde_json::Value::String(s) => Some(s.clone()),
                other => ["defaultMessage", "message"]
                    .iter()
                    .find_map(|k| other.get(*k).and_then(|v| v.as_str()).map(str::to_string)),
            })
            .filter(|m| !m.trim().is_empty())
            .collect();
        if !listed.is_empty() {
            return listed.join("; ");
        }
    }
    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') && body.len() <= 200 {
        return body.to_string();
    }
    format!("Request failed with status {}", status)
}

/// Resolved backend base URL: stored override, build-time value, default
pub fn base_url() -> String {
    resolve_base_url(
        storage::api_base_url_override().as_deref(),
        option_env!("SMART_MENU_API_URL"),
    )
}

// ========================
// Transport
// ========================

#[derive(Clone, Copy, PartialEq)]
enum Auth {
    /// Bearer token attached; 401 ends the session
    Required,
    /// Public endpoint; 401 is an ordinary error
    None,
}

async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
    auth: Auth,
) -> Result<String, ApiError> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_error(e)))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_error(e)))?;
    if auth == Auth::Required {
        if let Some(token) = storage::token() {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(|e| ApiError::Network(js_error(e)))?;
        }
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            let line = format!("[API] {} {} failed: {}", method, path, js_error(e.clone()));
            web_sys::console::error_1(&line.into());
            ApiError::Network(js_error(e))
        })?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Response".to_string()))?;

    let status = response.status();
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if status == 401 && auth == Auth::Required {
        let line = format!("[API] {} {} -> 401, ending session", method, path);
        web_sys::console::warn_1(&line.into());
        storage::clear_session();
        router::hard_redirect_to_login();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = server_message(status, &text);
        let line = format!("[API] {} {} -> {}: {}", method, path, status, message);
        web_sys::console::warn_1(&line.into());
        return Err(ApiError::Http { status, message });
    }
    Ok(text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(&send("GET", path, None, Auth::Required).await?)
}

pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(&send("POST", path, Some(encode(body)?), Auth::Required).await?)
}

pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(&send("PUT", path, Some(encode(body)?), Auth::Required).await?)
}

pub(crate) async fn patch<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(&send("PATCH", path, None, Auth::Required).await?)
}

/// DELETE; the response body, if any, is ignored
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    send("DELETE", path, None, Auth::Required).await.map(|_| ())
}

pub(crate) async fn get_public<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(&send("GET", path, None, Auth::None).await?)
}

pub(crate) async fn post_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(&send("POST", path, Some(encode(body)?), Auth::None).await?)
}

/// Path segment with reserved characters escaped
pub(crate) fn segment(id: &str) -> String {
    smart_menu_core::format::encode_component(id)
}

// ========================
// Health
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /health`, used to test a backend URL from the settings page
pub async fn health() -> Result<HealthStatus, ApiError> {
    get_public("/health").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_message_then_error() {
        assert_eq!(
            server_message(400, r#"{"message":"Error: Username is already taken!"}"#),
            "Error: Username is already taken!"
        );
        assert_eq!(server_message(404, r#"{"error":"Table not found"}"#), "Table not found");
        assert_eq!(server_message(400, r#"{"message":"  ","error":"Bad"}"#), "Bad");
    }

    #[test]
    fn test_server_message_joins_error_lists() {
        assert_eq!(
            server_message(400, r#"{"errors":["tableNumber is required","location too long"]}"#),
            "tableNumber is required; location too long"
        );
        assert_eq!(
            server_message(400, r#"{"errors":[{"field":"userId","defaultMessage":"User ID is required"}]}"#),
            "User ID is required"
        );
        assert_eq!(server_message(400, r#"{"errors":[]}"#), "Request failed with status 400");
    }

    #[test]
    fn test_server_message_fallbacks() {
        assert_eq!(server_message(500, "Internal failure"), "Internal failure");
        assert_eq!(server_message(404, ""), "Request failed with status 404");
        assert_eq!(server_message(400, r#"{"other":1}"#), "Request failed with status 400");
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert!(ApiError::Http { status: 404, message: "x".into() }.is_not_found());
        assert_eq!(ApiError::Network("down".into()).status(), None);
        assert_eq!(ApiError::Http { status: 400, message: "Bad price".into() }.to_string(), "Bad price");
    }
}
