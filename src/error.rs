//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the [`crate::ClientConfigBuilder`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use segment_config::{WorkspaceName, ConfigError};
//!
//! let result = WorkspaceName::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyWorkspaceName)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Workspace name cannot be empty.
    #[error("Workspace name cannot be empty. Please provide the slug of a Segment workspace.")]
    EmptyWorkspaceName,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Config API access token.")]
    EmptyAuthToken,

    /// Connection mode string is not recognized.
    #[error("Invalid connection mode '{mode}'. Expected 'CLOUD' or 'DEVICE'.")]
    InvalidConnectionMode {
        /// The invalid mode string that was provided.
        mode: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
