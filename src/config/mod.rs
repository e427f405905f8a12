//! Configuration types for the Segment Config API client.
//!
//! This module provides the long-lived client configuration: the default
//! workspace, catalog source and connection mode applied when an operation
//! omits them, the bearer token, and the API base URL.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The configuration struct holding all client settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`WorkspaceName`]: A validated workspace slug
//! - [`AuthToken`]: A validated access token with masked debug output
//! - [`ConnectionMode`]: The connection mode applied to new destinations
//!
//! # Example
//!
//! ```rust
//! use segment_config::{ClientConfig, WorkspaceName, AuthToken};
//!
//! let config = ClientConfig::builder()
//!     .workspace(WorkspaceName::new("my-workspace").unwrap())
//!     .token(AuthToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.workspace().as_ref(), "my-workspace");
//! ```

mod newtypes;

pub use newtypes::{AuthToken, ConnectionMode, WorkspaceName};

use crate::error::ConfigError;

/// Default API root for the Segment Config API.
pub const DEFAULT_BASE_URL: &str = "https://platform.segmentapis.com/v1beta";

/// Default catalog source used when creating a source without an explicit
/// catalog name.
pub const DEFAULT_CATALOG_SOURCE: &str = "catalog/sources/javascript";

/// Configuration for the Segment Config API client.
///
/// This struct holds all long-lived settings read by the request builders:
/// the default workspace, catalog source, connection mode, bearer token,
/// and base URL. Operations read these defaults; nothing mutates them.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use segment_config::{ClientConfig, ConnectionMode, WorkspaceName};
///
/// let config = ClientConfig::builder()
///     .workspace(WorkspaceName::new("my-workspace").unwrap())
///     .connection_mode(ConnectionMode::Device)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.connection_mode(), ConnectionMode::Device);
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    workspace: WorkspaceName,
    token: Option<AuthToken>,
    base_url: String,
    catalog_source: String,
    connection_mode: ConnectionMode,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the default workspace.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceName {
        &self.workspace
    }

    /// Returns the bearer token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default catalog source name.
    #[must_use]
    pub fn catalog_source(&self) -> &str {
        &self.catalog_source
    }

    /// Returns the default connection mode for new destinations.
    #[must_use]
    pub const fn connection_mode(&self) -> ConnectionMode {
        self.connection_mode
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// The only required field is `workspace`. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `catalog_source`: [`DEFAULT_CATALOG_SOURCE`]
/// - `connection_mode`: [`ConnectionMode::Cloud`]
/// - `token`: `None`
///
/// # Example
///
/// ```rust
/// use segment_config::{ClientConfig, WorkspaceName, AuthToken, ConnectionMode};
///
/// let config = ClientConfig::builder()
///     .workspace(WorkspaceName::new("my-workspace").unwrap())
///     .token(AuthToken::new("token").unwrap())
///     .base_url("https://config-api.internal.example.com/v1beta")
///     .catalog_source("catalog/sources/rust")
///     .connection_mode(ConnectionMode::Cloud)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    workspace: Option<WorkspaceName>,
    token: Option<AuthToken>,
    base_url: Option<String>,
    catalog_source: Option<String>,
    connection_mode: Option<ConnectionMode>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default workspace (required).
    #[must_use]
    pub fn workspace(mut self, workspace: WorkspaceName) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// Sets the bearer token used to authenticate requests.
    #[must_use]
    pub fn token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API base URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the default catalog source applied when creating sources.
    #[must_use]
    pub fn catalog_source(mut self, catalog_source: impl Into<String>) -> Self {
        self.catalog_source = Some(catalog_source.into());
        self
    }

    /// Sets the default connection mode applied when creating destinations.
    #[must_use]
    pub const fn connection_mode(mut self, mode: ConnectionMode) -> Self {
        self.connection_mode = Some(mode);
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `workspace` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let workspace = self
            .workspace
            .ok_or(ConfigError::MissingRequiredField { field: "workspace" })?;

        let base_url = self
            .base_url
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |url| {
                url.trim_end_matches('/').to_string()
            });

        Ok(ClientConfig {
            workspace,
            token: self.token,
            base_url,
            catalog_source: self
                .catalog_source
                .unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string()),
            connection_mode: self.connection_mode.unwrap_or_default(),
        })
    }
}
