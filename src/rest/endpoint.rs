//! Endpoint composition for Rebilly REST URLs.
//!
//! An [`Endpoint`] is an immutable description of one API location: the
//! target environment, the API version segment, the resource controller
//! path, and optionally an instance identifier and an action suffix.
//! Composition is pure — the same inputs always yield the same URL, and
//! changing the environment changes only the host portion.
//!
//! # URL Shapes
//!
//! | Target | Shape |
//! |---|---|
//! | Collection | `{base}/{version}/{controller}/` |
//! | Instance | `{base}/{version}/{controller}/{id}` |
//! | Action | `{base}/{version}/{controller}/{id}/{action}/` |
//!
//! # Example
//!
//! ```rust
//! use rebilly_api::config::{ApiVersion, Environment};
//! use rebilly_api::rest::Endpoint;
//!
//! let version = ApiVersion::latest();
//! let endpoint = Endpoint::new(Environment::Sandbox, &version, "contacts");
//!
//! assert_eq!(
//!     endpoint.url(),
//!     "https://api-sandbox.rebilly.com/v2.1/contacts/"
//! );
//! ```

use crate::config::{ApiVersion, Environment};

/// An immutable descriptor for one Rebilly API endpoint.
///
/// Endpoints are built fresh for every operation; nothing about them is
/// shared or mutated between calls. The identifier is percent-encoded
/// during composition, so ids containing reserved characters cannot
/// change the path structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    environment: Environment,
    version: &'a ApiVersion,
    controller: &'a str,
    id: Option<&'a str>,
    action: Option<&'a str>,
}

impl<'a> Endpoint<'a> {
    /// Creates an endpoint targeting a resource collection.
    #[must_use]
    pub const fn new(
        environment: Environment,
        version: &'a ApiVersion,
        controller: &'a str,
    ) -> Self {
        Self {
            environment,
            version,
            controller,
            id: None,
            action: None,
        }
    }

    /// Narrows the endpoint to a single resource instance.
    #[must_use]
    pub const fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a resource action suffix (e.g. `refund`).
    #[must_use]
    pub const fn with_action(mut self, action: &'a str) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns the environment this endpoint targets.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Composes the host-relative path, starting with `/`.
    ///
    /// Collection and action paths carry a trailing slash; instance
    /// paths do not.
    #[must_use]
    pub fn path(&self) -> String {
        let version = self.version.as_str();
        let controller = self.controller;

        match (self.id, self.action) {
            (Some(id), Some(action)) => {
                let id = urlencoding::encode(id);
                format!("/{version}/{controller}/{id}/{action}/")
            }
            (Some(id), None) => {
                let id = urlencoding::encode(id);
                format!("/{version}/{controller}/{id}")
            }
            (None, Some(action)) => format!("/{version}/{controller}/{action}/"),
            (None, None) => format!("/{version}/{controller}/"),
        }
    }

    /// Composes the absolute URL for this endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.environment.base_url(), self.path())
    }
}
