//! Error types for REST resource operations.

use crate::clients::HttpError;

/// Errors that can occur when executing a resource operation.
///
/// Validation failures are reported before any URL is composed or any
/// network activity happens. Server-side rejections (4xx/5xx statuses)
/// are NOT errors; they come back as ordinary
/// [`HttpResponse`](crate::clients::HttpResponse) values.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// An operation that targets a single resource instance was called
    /// without an identifier (or with an empty one).
    #[error("{resource} id cannot be empty")]
    MissingId {
        /// Name of the resource type (e.g., "contact", "transaction").
        resource: &'static str,
    },

    /// The resource could not be serialized into a JSON request body.
    #[error("Failed to serialize {resource}: {source}")]
    Serialization {
        /// Name of the resource type that failed to serialize.
        resource: &'static str,
        /// The underlying serialization error.
        source: serde_json::Error,
    },

    /// The HTTP layer failed at the transport level.
    #[error(transparent)]
    Http(#[from] HttpError),
}
