//! # Rebilly API Rust SDK
//!
//! A Rust SDK for the Rebilly payments API, providing type-safe
//! configuration, versioned endpoint composition, and HTTP client
//! functionality for billing integrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RebillyConfig`] and [`RebillyConfigBuilder`]
//! - Validated newtypes for the API key credential and host values
//! - Sandbox and production environments with fixed base hosts
//! - Deterministic, versioned endpoint composition
//! - REST resources (Contact, Transaction) sharing one operation pattern
//! - An async HTTP client that reports every HTTP status as a normal
//!   response
//!
//! ## Quick Start
//!
//! ```rust
//! use rebilly_api::{ApiKey, Environment, RebillyConfig};
//!
//! // Create configuration using the builder pattern
//! let config = RebillyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Creating a Contact
//!
//! ```rust,ignore
//! use rebilly_api::{ApiKey, RebillyConfig};
//! use rebilly_api::rest::{RestClient, RestResource};
//! use rebilly_api::rest::resources::Contact;
//!
//! let config = RebillyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = RestClient::new(&config);
//!
//! let contact = Contact {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..Default::default()
//! };
//!
//! // POST https://api-sandbox.rebilly.com/v2.1/contacts/
//! let response = contact.create(&client).await?;
//! println!("Status: {}", response.code);
//! ```
//!
//! ## Refunding a Transaction
//!
//! ```rust,ignore
//! use rebilly_api::rest::resources::Transaction;
//!
//! let transaction = Transaction {
//!     id: Some("txn123".to_string()),
//!     amount: Some("9.99".to_string()),
//! };
//!
//! // POST https://api-sandbox.rebilly.com/v2.1/transactions/txn123/refund/
//! let response = transaction.refund(&client).await?;
//! ```
//!
//! ## Handling Responses
//!
//! Every operation returns an [`HttpResponse`] carrying the raw status
//! code and body. The SDK never turns a non-2xx status into an error;
//! inspect `code` (or `is_success()`) and parse the body when you need
//! it:
//!
//! ```rust,ignore
//! let response = Contact::with_id("con-42").retrieve(&client).await?;
//!
//! if response.is_success() {
//!     let body = response.json()?;
//!     println!("Contact: {body}");
//! } else {
//!     println!("API returned {}: {}", response.code, response.body);
//! }
//! ```
//!
//! Errors (`Err`) are reserved for problems on the caller's side: a
//! missing identifier, an unserializable payload, or a transport failure
//! such as a timeout or DNS error.
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use rebilly_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "https://api-sandbox.rebilly.com/v2.1/contacts/",
//! )
//! .build()
//! .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; missing
//!   identifiers are rejected before any network call
//! - **Statuses are data**: Non-2xx replies are responses, not errors
//! - **Thread-safe**: All shared types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, Environment, HostUrl, RebillyConfig, RebillyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export REST infrastructure for convenience
pub use rest::{Endpoint, ResourceError, RestClient, RestResource};
