//! Rebilly API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Rebilly API a resource targets. The version appears as a path
//! segment in every composed URL.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Rebilly API version.
///
/// The version renders as the path segment between the base host and the
/// controller path (e.g. `v2.1` in `https://api.rebilly.com/v2.1/contacts/`).
/// A `Custom` variant is provided for future versions the SDK does not yet
/// know about.
///
/// # Example
///
/// ```rust
/// use rebilly_api::ApiVersion;
///
/// // Use the latest known version
/// let version = ApiVersion::latest();
/// assert_eq!(format!("{}", version), "v2.1");
///
/// // Parse from string
/// let version: ApiVersion = "v2.1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2_1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.1, the current stable version.
    V2_1,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    ///
    /// This should be updated when new versions are released.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2_1
    }

    /// Returns `true` if this is a version known to the SDK.
    ///
    /// Returns `false` for `Custom` variants.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the version as the path segment it renders to.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2_1 => "v2.1",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: "v" followed by a number, optionally ".number" (e.g. v2, v2.1)
        let Some(rest) = s.strip_prefix('v') else {
            return false;
        };

        let mut parts = rest.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts.next();

        if parts.next().is_some() {
            return false;
        }

        let is_number = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());

        is_number(major) && minor.map_or(true, is_number)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v2.1" => Ok(Self::V2_1),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
