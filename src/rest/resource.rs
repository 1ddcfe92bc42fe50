//! REST Resource trait for Rebilly API operations.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface for interacting with Rebilly REST API resources.
//! Resources that implement this trait gain `create()`, `update()`,
//! `retrieve()`, `list_all()`, and `post_action()` methods.
//!
//! # Implementing a Resource
//!
//! To implement a REST resource:
//!
//! 1. Define a struct whose data fields are all `Option`al, with serde
//!    attributes omitting unset fields from request bodies
//! 2. Implement the `RestResource` trait with the resource's name and
//!    controller path
//! 3. The trait provides default implementations for every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use rebilly_api::rest::{RestClient, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Subscription {
//!     #[serde(skip_serializing)]
//!     pub id: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub plan: Option<String>,
//! }
//!
//! impl RestResource for Subscription {
//!     const NAME: &'static str = "subscription";
//!     const CONTROLLER: &'static str = "subscriptions";
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//!
//! // Usage:
//! let response = subscription.create(&client).await?;
//! let listing = Subscription::list_all(&client).await?;
//! ```

use serde::Serialize;

use crate::clients::HttpResponse;
use crate::config::ApiVersion;
use crate::rest::client::RestClient;
use crate::rest::endpoint::Endpoint;
use crate::rest::errors::ResourceError;
use crate::rest::payload;

/// A REST resource that can be created, updated, retrieved, and listed.
///
/// This trait provides a standardized interface for operations on Rebilly
/// REST API resources. Implementors define the resource's name, controller
/// path, and identifier accessor, and get default implementations for all
/// operations.
///
/// Every operation takes the [`RestClient`] executor by reference; resources
/// themselves hold only data. Operations that target a single instance
/// (`update`, `retrieve`, `post_action`) validate the identifier and return
/// [`ResourceError::MissingId`] before composing any URL or touching the
/// network.
///
/// The returned [`HttpResponse`] carries whatever status and body the server
/// produced; a 422 validation reply is a successful call from the SDK's
/// point of view.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "contact"), used in error
///   messages
/// - `CONTROLLER`: The collection path segment (e.g., "contacts")
/// - `VERSION`: The API version segment, defaulting to v2.1
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + Send + Sync + Sized {
    /// The singular name of the resource (e.g., "contact").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// The controller path segment for the resource collection
    /// (e.g., "contacts").
    const CONTROLLER: &'static str;

    /// The API version the resource targets.
    ///
    /// Defaults to v2.1; override for resources introduced in a later
    /// version.
    const VERSION: ApiVersion = ApiVersion::V2_1;

    /// Returns the resource's identifier if it has one.
    ///
    /// Returns `None` for new resources that haven't been assigned an id.
    fn id(&self) -> Option<&str>;

    /// Returns the identifier, or [`ResourceError::MissingId`] if it is
    /// unset or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when no usable identifier is
    /// present.
    fn require_id(&self) -> Result<&str, ResourceError> {
        match self.id() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ResourceError::MissingId {
                resource: Self::NAME,
            }),
        }
    }

    /// Creates the resource.
    ///
    /// Serializes the set fields and sends one POST to the collection
    /// endpoint. No identifier is required.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body cannot be
    /// rendered, or [`ResourceError::Http`] for transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let contact = Contact::new().first_name("John").last_name("Doe");
    /// let response = contact.create(&client).await?;
    /// assert!(response.is_success());
    /// ```
    async fn create(&self, client: &RestClient) -> Result<HttpResponse, ResourceError> {
        let body = payload::serialize(self, Self::NAME)?;
        let version = Self::VERSION;
        let endpoint = Endpoint::new(client.environment(), &version, Self::CONTROLLER);

        tracing::debug!("Creating {}", Self::NAME);
        Ok(client.post(&endpoint, body).await?)
    }

    /// Updates the resource instance identified by [`RestResource::id`].
    ///
    /// Serializes the set fields and sends one PUT to the instance
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any network activity if
    /// the identifier is unset or empty; [`ResourceError::Serialization`]
    /// or [`ResourceError::Http`] otherwise.
    async fn update(&self, client: &RestClient) -> Result<HttpResponse, ResourceError> {
        let id = self.require_id()?;
        let body = payload::serialize(self, Self::NAME)?;
        let version = Self::VERSION;
        let endpoint =
            Endpoint::new(client.environment(), &version, Self::CONTROLLER).with_id(id);

        tracing::debug!("Updating {} {}", Self::NAME, id);
        Ok(client.put(&endpoint, body).await?)
    }

    /// Retrieves the resource instance identified by [`RestResource::id`].
    ///
    /// Sends one GET to the instance endpoint; no body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any network activity if
    /// the identifier is unset or empty; [`ResourceError::Http`] for
    /// transport failures.
    async fn retrieve(&self, client: &RestClient) -> Result<HttpResponse, ResourceError> {
        let id = self.require_id()?;
        let version = Self::VERSION;
        let endpoint =
            Endpoint::new(client.environment(), &version, Self::CONTROLLER).with_id(id);

        tracing::debug!("Retrieving {} {}", Self::NAME, id);
        Ok(client.get(&endpoint).await?)
    }

    /// Lists the resource collection.
    ///
    /// Sends one GET to the collection endpoint; no identifier, no body,
    /// no filtering.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = Contact::list_all(&client).await?;
    /// let contacts = response.json()?;
    /// ```
    async fn list_all(client: &RestClient) -> Result<HttpResponse, ResourceError> {
        let version = Self::VERSION;
        let endpoint = Endpoint::new(client.environment(), &version, Self::CONTROLLER);

        tracing::debug!("Listing {}", Self::CONTROLLER);
        Ok(client.get(&endpoint).await?)
    }

    /// Posts a resource-specific action (e.g. `refund`) on the instance
    /// identified by [`RestResource::id`].
    ///
    /// The set fields become the action's body; a resource with no set
    /// fields sends `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any network activity if
    /// the identifier is unset or empty; [`ResourceError::Serialization`]
    /// or [`ResourceError::Http`] otherwise.
    async fn post_action(
        &self,
        client: &RestClient,
        action: &str,
    ) -> Result<HttpResponse, ResourceError> {
        let id = self.require_id()?;
        let body = payload::serialize(self, Self::NAME)?;
        let version = Self::VERSION;
        let endpoint = Endpoint::new(client.environment(), &version, Self::CONTROLLER)
            .with_id(id)
            .with_action(action);

        tracing::debug!("Posting {} action on {} {}", action, Self::NAME, id);
        Ok(client.post(&endpoint, body).await?)
    }
}
