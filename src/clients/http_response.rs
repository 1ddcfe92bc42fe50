//! HTTP response types for the Rebilly API SDK.
//!
//! This module provides the [`HttpResponse`] type, the uniform value every
//! operation returns. A response carries the status code and the body
//! exactly as the server produced them; the SDK never interprets the
//! status or raises an error for non-2xx codes. Callers branch on the
//! status themselves.

use std::collections::HashMap;

/// A response from the Rebilly API.
///
/// Created fresh for each call and never merged with a prior response.
/// The body is kept verbatim as raw text; use [`json()`](Self::json) to
/// parse it on demand.
///
/// # Example
///
/// ```rust
/// use rebilly_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(201, HashMap::new(), r#"{"id":"c-1"}"#.to_string());
///
/// assert!(response.is_success());
/// assert_eq!(response.code, 201);
/// assert_eq!(response.json().unwrap()["id"], "c-1");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body, exactly as received.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    ///
    /// Header names are expected to be lowercase; the client lowercases
    /// them when parsing the wire response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code indicates success (2xx).
    ///
    /// This is a convenience for callers; a `false` result is not an
    /// error condition anywhere in the SDK.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Parses the raw body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is empty or is not
    /// valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
