//! Version-specific REST resource implementations.
//!
//! This module contains REST resource implementations organized by API
//! version. Each version module contains the resource structs for that
//! API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2_1/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! # Using Resources
//!
//! The latest stable version is re-exported at this module level for
//! convenience:
//!
//! ```rust,ignore
//! use rebilly_api::rest::resources::Contact;  // Uses latest version
//!
//! // Or explicitly specify a version:
//! use rebilly_api::rest::resources::v2_1::Contact;
//! ```
//!
//! When Rebilly introduces breaking changes in a new API version, a new
//! version-specific module will be added without breaking existing code.

pub mod v2_1;

// Re-export types from the latest version for convenience
pub use v2_1::*;
