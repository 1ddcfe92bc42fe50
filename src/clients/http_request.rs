//! HTTP request types for the Rebilly API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Rebilly API. A request is an immutable
//! descriptor built fresh for each operation; nothing is shared or
//! mutated between calls.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Rebilly API.
///
/// The API uses three verbs: GET for retrieval and listing, POST for
/// creation and resource actions, PUT for updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and invoking actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl HttpMethod {
    /// Returns `true` if this method carries a request body.
    ///
    /// GET requests never send a body; POST and PUT always do.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An HTTP request to be sent to the Rebilly API.
///
/// The `url` is the complete, already composed URL for the call; the
/// optional `body` is pre-serialized JSON text. When a body is present
/// the client sends it with an `application/json` content type.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use rebilly_api::clients::{HttpRequest, HttpMethod};
///
/// // GET request
/// let get_request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api-sandbox.rebilly.com/v2.1/contacts/",
/// )
/// .build()
/// .unwrap();
///
/// // POST request with a JSON body
/// let post_request = HttpRequest::builder(
///     HttpMethod::Post,
///     "https://api-sandbox.rebilly.com/v2.1/contacts/",
/// )
/// .body(r#"{"firstName":"John"}"#)
/// .build()
/// .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The pre-serialized JSON body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `url` - The absolute URL for the request
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.has_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if !self.http_method.has_body() && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<String>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and URL.
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
        }
    }

    /// Sets the pre-serialized JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
