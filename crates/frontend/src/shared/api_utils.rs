//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs, tagging requests with
//! the UI language and turning failed responses into an `ApiErrorBody`.

use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::language::Language;
use gloo_net::http::{RequestBuilder, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/expense-types");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Adds the JSON `Accept` header and the UI language
pub fn with_locale(builder: RequestBuilder, lang: Language) -> RequestBuilder {
    builder
        .header("Accept", "application/json")
        .header("Accept-Language", lang.code())
}

pub fn transport_error(context: &str, err: impl std::fmt::Display) -> ApiErrorBody {
    ApiErrorBody::message(format!("{}: {}", context, err))
}

/// Best-effort `ApiErrorBody` from a non-2xx body; falls back to the status line
pub fn parse_error_body(status: u16, body: &str) -> ApiErrorBody {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed,
        Err(_) => ApiErrorBody::message(format!("HTTP {}", status)),
    }
}

/// Decodes a successful response, or reads the error body of a failed one
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiErrorBody> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(parse_error_body(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| transport_error("Failed to parse response", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_kept() {
        let body = r#"{"message":"The given data was invalid.","errors":{"farsi":"The farsi field is required."}}"#;
        let parsed = parse_error_body(422, body);
        assert_eq!(parsed.message, "The given data was invalid.");
        assert_eq!(
            parsed.errors.as_ref().and_then(|e| e.get("farsi")),
            Some("The farsi field is required.")
        );
    }

    #[test]
    fn plain_text_body_falls_back_to_status() {
        let parsed = parse_error_body(502, "Bad Gateway");
        assert_eq!(parsed.message, "HTTP 502");
        assert!(parsed.errors.is_none());
    }
}
