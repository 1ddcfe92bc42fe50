//! REST Resource infrastructure for the Rebilly API.
//!
//! This module provides the foundational infrastructure for REST resources:
//!
//! - **[`RestResource`] trait**: A standardized interface for resource
//!   operations (`create`, `update`, `retrieve`, `list_all`, `post_action`)
//! - **[`RestClient`]**: The injected executor that turns endpoints and
//!   bodies into HTTP requests
//! - **[`Endpoint`]**: An immutable, deterministic URL descriptor
//! - **[`ResourceError`]**: Validation and transport errors for resource
//!   operations
//!
//! # Overview
//!
//! This module is the foundation for REST resource implementations.
//! Individual resources (Contact, Transaction) are implemented in the
//! `resources` submodule; they hold only data and delegate every
//! operation to the shared machinery here.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use rebilly_api::{ApiKey, Environment, RebillyConfig};
//! use rebilly_api::rest::{RestClient, RestResource};
//! use rebilly_api::rest::resources::Contact;
//!
//! // Create a client
//! let config = RebillyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .environment(Environment::Sandbox)
//!     .build()?;
//! let client = RestClient::new(&config);
//!
//! // Create a contact
//! let contact = Contact {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..Default::default()
//! };
//! let response = contact.create(&client).await?;
//! println!("Status: {}", response.code);
//!
//! // Retrieve it by id
//! let response = Contact::with_id("con-42").retrieve(&client).await?;
//! let body = response.json()?;
//! ```

pub mod client;
pub mod endpoint;
pub mod errors;
pub mod payload;
pub mod resource;
pub mod resources;

pub use client::RestClient;
pub use endpoint::Endpoint;
pub use errors::ResourceError;
pub use resource::RestResource;
