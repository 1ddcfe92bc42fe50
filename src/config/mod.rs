//! Configuration types for the Rebilly API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Rebilly.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RebillyConfig`]: The main configuration struct holding all SDK settings
//! - [`RebillyConfigBuilder`]: A builder for constructing [`RebillyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Environment`]: The target deployment (sandbox or production)
//! - [`ApiVersion`]: An API version path segment (fixed per resource type)
//! - [`HostUrl`]: A validated host URL for the optional proxy override
//!
//! # Example
//!
//! ```rust
//! use rebilly_api::{RebillyConfig, ApiKey, Environment};
//!
//! let config = RebillyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;
mod version;

pub use environment::Environment;
pub use newtypes::{ApiKey, HostUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout applied to every HTTP call.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Rebilly API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// key credential, the target environment, and transport-level settings.
/// Once built it is immutable; concurrent clients may share it read-only.
///
/// # Thread Safety
///
/// `RebillyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use rebilly_api::{RebillyConfig, ApiKey, Environment};
///
/// let config = RebillyConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .environment(Environment::Production)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.environment(), Environment::Production);
/// ```
#[derive(Clone, Debug)]
pub struct RebillyConfig {
    api_key: ApiKey,
    environment: Environment,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    request_timeout: Duration,
}

impl RebillyConfig {
    /// Creates a new builder for constructing a `RebillyConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rebilly_api::{RebillyConfig, ApiKey};
    ///
    /// let config = RebillyConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> RebillyConfigBuilder {
        RebillyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the host override, if configured.
    ///
    /// When set, requests are routed to this host instead of the
    /// environment's base host (proxy scenario). The path portion of each
    /// composed URL is unchanged.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

// Verify RebillyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RebillyConfig>();
};

/// Builder for constructing [`RebillyConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `api_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `request_timeout`: 30 seconds
///
/// # Example
///
/// ```rust
/// use rebilly_api::{RebillyConfig, ApiKey, Environment, HostUrl};
/// use std::time::Duration;
///
/// let config = RebillyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .environment(Environment::Sandbox)
///     .api_host(HostUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .request_timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct RebillyConfigBuilder {
    api_key: Option<ApiKey>,
    environment: Option<Environment>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    request_timeout: Option<Duration>,
}

impl RebillyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the host override for routing requests through a proxy.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout for HTTP calls.
    ///
    /// A timed-out request surfaces as a transport error rather than
    /// hanging indefinitely.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the [`RebillyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<RebillyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(RebillyConfig {
            api_key,
            environment: self.environment.unwrap_or_default(),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}
