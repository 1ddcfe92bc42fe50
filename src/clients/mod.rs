//! HTTP client functionality for Rebilly API interactions.
//!
//! This module contains the transport layer of the SDK:
//!
//! - [`HttpClient`]: Executes authenticated requests and wraps responses
//! - [`HttpRequest`]: An immutable description of a single API call
//! - [`HttpResponse`]: The raw status, headers, and body from the server
//!
//! Most applications will not use these types directly; the resource
//! types in [`crate::rest`] build requests and hand them to the client.

pub mod errors;
pub mod http_client;
pub mod http_request;
pub mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
