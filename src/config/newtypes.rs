//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated Segment workspace name.
///
/// This newtype ensures the workspace slug is non-empty and provides type
/// safety to prevent accidental misuse of raw strings. Uniqueness and
/// existence of the workspace are enforced server-side.
///
/// # Example
///
/// ```rust
/// use segment_config::WorkspaceName;
///
/// let workspace = WorkspaceName::new("my-workspace").unwrap();
/// assert_eq!(workspace.as_ref(), "my-workspace");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceName(String);

impl WorkspaceName {
    /// Creates a new validated workspace name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWorkspaceName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyWorkspaceName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for WorkspaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Config API access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use segment_config::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// Connection mode for newly created destinations.
///
/// The Config API accepts `CLOUD` or `DEVICE`; the wire format is the
/// upper-case string.
///
/// # Example
///
/// ```rust
/// use segment_config::ConnectionMode;
///
/// assert_eq!(ConnectionMode::Cloud.as_str(), "CLOUD");
/// assert_eq!("DEVICE".parse::<ConnectionMode>().unwrap(), ConnectionMode::Device);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMode {
    /// Cloud-mode connection (server-side data flow). The default.
    #[default]
    #[serde(rename = "CLOUD")]
    Cloud,
    /// Device-mode connection (data sent from the client device).
    #[serde(rename = "DEVICE")]
    Device,
}

impl ConnectionMode {
    /// Returns the wire representation of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "CLOUD",
            Self::Device => "DEVICE",
        }
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLOUD" => Ok(Self::Cloud),
            "DEVICE" => Ok(Self::Device),
            other => Err(ConfigError::InvalidConnectionMode {
                mode: other.to_string(),
            }),
        }
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WorkspaceName>();
    assert_send_sync::<AuthToken>();
    assert_send_sync::<ConnectionMode>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_name_accepts_non_empty() {
        let name = WorkspaceName::new("my-workspace").unwrap();
        assert_eq!(name.as_ref(), "my-workspace");
        assert_eq!(name.to_string(), "my-workspace");
    }

    #[test]
    fn test_workspace_name_rejects_empty() {
        assert!(matches!(
            WorkspaceName::new(""),
            Err(ConfigError::EmptyWorkspaceName)
        ));
    }

    #[test]
    fn test_auth_token_rejects_empty() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_auth_token_debug_is_masked() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AuthToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_connection_mode_defaults_to_cloud() {
        assert_eq!(ConnectionMode::default(), ConnectionMode::Cloud);
    }

    #[test]
    fn test_connection_mode_wire_format() {
        assert_eq!(ConnectionMode::Cloud.to_string(), "CLOUD");
        assert_eq!(ConnectionMode::Device.to_string(), "DEVICE");

        let json = serde_json::to_string(&ConnectionMode::Device).unwrap();
        assert_eq!(json, r#""DEVICE""#);
    }

    #[test]
    fn test_connection_mode_parse() {
        assert_eq!(
            "CLOUD".parse::<ConnectionMode>().unwrap(),
            ConnectionMode::Cloud
        );
        assert!(matches!(
            "cloud".parse::<ConnectionMode>(),
            Err(ConfigError::InvalidConnectionMode { mode }) if mode == "cloud"
        ));
    }
}
