//! REST client for executing resource operations.
//!
//! [`RestClient`] is the injected executor behind every resource
//! operation: resources compose an [`Endpoint`] and a body, and the
//! client turns them into one HTTP request. It owns the configured
//! [`HttpClient`] plus the environment, so resources never touch
//! credentials or hosts directly.
//!
//! # Example
//!
//! ```rust
//! use rebilly_api::{ApiKey, RebillyConfig};
//! use rebilly_api::rest::RestClient;
//!
//! let config = RebillyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! ```

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{Environment, HostUrl, RebillyConfig};
use crate::rest::endpoint::Endpoint;

/// Executes REST operations against the Rebilly API.
///
/// One `RestClient` serves any number of resources and calls; it holds
/// no per-call state. It is `Send + Sync` and can be shared across
/// tasks behind a reference or an `Arc`.
#[derive(Debug)]
pub struct RestClient {
    /// The underlying HTTP client with default headers.
    http_client: HttpClient,
    /// The environment whose base host endpoints resolve against.
    environment: Environment,
    /// Optional host override routing all requests elsewhere (proxy, test double).
    api_host: Option<HostUrl>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    #[must_use]
    pub fn new(config: &RebillyConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            environment: config.environment(),
            api_host: config.api_host().cloned(),
        }
    }

    /// Returns the environment this client targets.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Resolves the absolute URL for an endpoint.
    ///
    /// With no host override this is exactly [`Endpoint::url`]; with one,
    /// the override replaces the environment's base host while the path
    /// portion stays untouched.
    #[must_use]
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> String {
        self.api_host.as_ref().map_or_else(
            || endpoint.url(),
            |host| format!("{}{}", host.as_ref(), endpoint.path()),
        )
    }

    /// Performs a GET request against the endpoint. GET requests never
    /// carry a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only for transport-level failures; any HTTP
    /// status comes back as a normal [`HttpResponse`].
    pub async fn get(&self, endpoint: &Endpoint<'_>) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.url_for(endpoint)).build()?;
        self.http_client.request(request).await
    }

    /// Performs a POST request with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only for transport-level failures; any HTTP
    /// status comes back as a normal [`HttpResponse`].
    pub async fn post(
        &self,
        endpoint: &Endpoint<'_>,
        body: String,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.url_for(endpoint))
            .body(body)
            .build()?;
        self.http_client.request(request).await
    }

    /// Performs a PUT request with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only for transport-level failures; any HTTP
    /// status comes back as a normal [`HttpResponse`].
    pub async fn put(
        &self,
        endpoint: &Endpoint<'_>,
        body: String,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, self.url_for(endpoint))
            .body(body)
            .build()?;
        self.http_client.request(request).await
    }
}
