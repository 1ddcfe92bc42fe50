//! Rebilly deployment environments.
//!
//! This module provides the [`Environment`] enum for selecting which
//! Rebilly deployment a client talks to. Each environment is bound to
//! exactly one base host; hosts are never selectable per call.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Rebilly deployment environment.
///
/// Each environment maps to a fixed base host. The sandbox environment is
/// the default so that freshly configured clients cannot accidentally reach
/// production.
///
/// # Example
///
/// ```rust
/// use rebilly_api::Environment;
///
/// assert_eq!(Environment::Sandbox.base_url(), "https://api-sandbox.rebilly.com");
/// assert_eq!(Environment::Production.base_url(), "https://api.rebilly.com");
///
/// // Parse from string
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Sandbox environment for development and testing.
    #[default]
    Sandbox,
    /// Production environment serving live traffic.
    Production,
}

impl Environment {
    /// Returns the fixed base host for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-sandbox.rebilly.com",
            Self::Production => "https://api.rebilly.com",
        }
    }

    /// Returns the lowercase environment name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvironment {
                value: other.to_string(),
            }),
        }
    }
}
