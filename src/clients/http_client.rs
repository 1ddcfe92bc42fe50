//! HTTP client for Rebilly API communication.
//!
//! This module provides the [`HttpClient`] type for executing authenticated
//! requests against the Rebilly API. The client is deliberately thin: it
//! attaches credentials, dispatches one verb, and hands back whatever
//! status and body the server produced. It performs no retries and never
//! converts an HTTP status into an error.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::RebillyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "REB-APIKEY";

/// HTTP client for making requests to the Rebilly API.
///
/// The client handles:
/// - Default headers including the `REB-APIKEY` credential and User-Agent
/// - Verb dispatch for GET, POST, and PUT
/// - A request timeout so hung connections surface as transport errors
///
/// Any HTTP status the server returns, 2xx or otherwise, is a normal
/// [`HttpResponse`]; only transport-level failures produce an [`HttpError`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rebilly_api::{RebillyConfig, ApiKey};
/// use rebilly_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = RebillyConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api-sandbox.rebilly.com/v2.1/contacts/",
/// )
/// .build()
/// .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rebilly_api::{RebillyConfig, ApiKey};
    /// use rebilly_api::clients::HttpClient;
    ///
    /// let config = RebillyConfig::builder()
    ///     .api_key(ApiKey::new("my-api-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &RebillyConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Rebilly API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Rebilly API.
    ///
    /// This method validates the request, dispatches the verb, attaches
    /// the default headers and (for POST/PUT) the JSON body, and wraps
    /// the wire response. The status code is returned as-is: a 404 or a
    /// 422 is a successful call from the executor's point of view.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection cannot be established, DNS resolution fails, or
    ///   the request times out (`Network`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, url).build().unwrap();
    ///
    /// let response = client.request(request).await?;
    /// if response.is_success() {
    ///     println!("Body: {}", response.body);
    /// }
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        tracing::debug!(
            "Dispatching {} request to {}",
            request.http_method,
            request.url
        );

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
        };

        // Add headers
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Add body with JSON content type
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.clone());
        }

        // Send request
        let res = req_builder.send().await?;

        // Wrap the wire response without interpreting the status
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            match value.to_str() {
                Ok(value) => result.entry(key).or_default().push(value.to_string()),
                Err(_) => {
                    tracing::warn!("Discarding non-UTF-8 value for response header {key}");
                }
            }
        }
        result
    }
}
