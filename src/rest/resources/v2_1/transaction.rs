//! Transaction resource implementation.
//!
//! This module provides the Transaction resource, which represents a
//! payment event processed through Rebilly.
//!
//! # Refunds
//!
//! Refunds are modeled as a resource action rather than a separate
//! resource: `refund()` posts to `transactions/{id}/refund/` with the
//! amount to return. Omitting the amount sends an empty body, which the
//! API interprets as a full refund.
//!
//! # Example
//!
//! ```rust,ignore
//! use rebilly_api::rest::resources::Transaction;
//!
//! // Refund 9.99 from a settled transaction
//! let transaction = Transaction {
//!     id: Some("txn123".to_string()),
//!     amount: Some("9.99".to_string()),
//! };
//! let response = transaction.refund(&client).await?;
//!
//! // Full refund: no amount set, body is {}
//! let transaction = Transaction::with_id("txn123");
//! let response = transaction.refund(&client).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpResponse;
use crate::rest::client::RestClient;
use crate::rest::errors::ResourceError;
use crate::rest::RestResource;

/// The action suffix for refund requests.
const REFUND_ACTION: &str = "refund";

/// A payment transaction.
///
/// Represents one payment event. Beyond plain CRUD it supports the
/// refund action via [`Transaction::refund`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The transaction identifier. Never serialized into request bodies.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The monetary amount as a decimal string (e.g. `"9.99"`).
    ///
    /// Amounts are strings on the wire; the SDK passes them through
    /// without reformatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl Transaction {
    /// Creates a new transaction with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transaction bound to an existing identifier, for
    /// instance-targeted operations like `retrieve()` and `refund()`.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Refunds the transaction.
    ///
    /// Sends a POST request to `transactions/{id}/refund/`. The body is
    /// `{"amount":"..."}` when an amount is set, or `{}` for a full
    /// refund.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any network activity
    /// if the transaction has no identifier;
    /// [`ResourceError::Serialization`] or [`ResourceError::Http`]
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let transaction = Transaction {
    ///     id: Some("txn123".to_string()),
    ///     amount: Some("9.99".to_string()),
    /// };
    /// let response = transaction.refund(&client).await?;
    /// assert!(response.is_success());
    /// ```
    pub async fn refund(&self, client: &RestClient) -> Result<HttpResponse, ResourceError> {
        self.post_action(client, REFUND_ACTION).await
    }
}

impl RestResource for Transaction {
    const NAME: &'static str = "transaction";
    const CONTROLLER: &'static str = "transactions";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
