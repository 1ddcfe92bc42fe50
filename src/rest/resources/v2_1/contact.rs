//! Contact resource implementation.
//!
//! A contact holds the billing identity of a customer: name, organization,
//! and postal address details. All data fields are optional; only the
//! fields that have been set are sent to the API.
//!
//! # Example
//!
//! ```rust,ignore
//! use rebilly_api::rest::resources::Contact;
//! use rebilly_api::rest::RestResource;
//!
//! let contact = Contact {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..Default::default()
//! };
//!
//! let response = contact.create(&client).await?;
//! assert!(response.is_success());
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A billing contact.
///
/// Holds the name, organization, and postal address details attached to a
/// customer. Every data field is optional; unset fields are omitted from
/// request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// The contact identifier. Never serialized into request bodies.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The contact's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The contact's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The organization the contact belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// The first street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The second street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// The country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The contact's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Contact {
    /// Creates a new contact with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact bound to an existing identifier, for
    /// instance-targeted operations like `retrieve()` and `update()`.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl RestResource for Contact {
    const NAME: &'static str = "contact";
    const CONTROLLER: &'static str = "contacts";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
