//! REST resources for API version 2.1.
//!
//! This module contains resource implementations for the v2.1 API.
//!
//! # Available Resources
//!
//! ## Contact Resource
//!
//! - [`Contact`] - The billing identity of a customer (name, organization,
//!   postal address)
//!
//! ## Transaction Resource
//!
//! - [`Transaction`] - A payment event processed through Rebilly
//!
//! The Transaction resource also provides resource-specific operations:
//! - `Transaction::refund()` - Refund a settled transaction

pub mod contact;
pub mod transaction;

pub use contact::Contact;
pub use transaction::Transaction;
