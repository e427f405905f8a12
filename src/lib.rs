//! # Segment Config API client
//!
//! A Rust client for the Segment Config API, providing type-safe
//! configuration, resource path construction, and an async HTTP client for
//! managing workspaces, sources, and destinations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the workspace name and access token
//! - Resource path derivation for the workspace/source/destination hierarchy
//! - A fixed catalog of operations mapped onto HTTP requests via
//!   [`rest::operations`]
//! - An async dispatcher with bearer-token injection and uniform error
//!   normalization
//!
//! ## Quick Start
//!
//! ```rust
//! use segment_config::{AuthToken, ClientConfig, ConfigClient, WorkspaceName};
//!
//! let config = ClientConfig::builder()
//!     .workspace(WorkspaceName::new("my-workspace").unwrap())
//!     .token(AuthToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ConfigClient::new(config);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use segment_config::rest::operations::{CreateDestinationParams, ListSourcesParams};
//! use segment_config::ConfigEntry;
//!
//! // List sources in the default workspace
//! let sources = client.list_sources(&ListSourcesParams::default()).await?;
//!
//! // Create a destination; short config field names are qualified
//! // against the destination's resource path automatically
//! let response = client
//!     .create_destination(&CreateDestinationParams {
//!         destination: "webhook".to_string(),
//!         source: "ios".to_string(),
//!         config: vec![ConfigEntry::new("apiKey", "secret")],
//!         ..CreateDestinationParams::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Config newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No hidden behavior**: No retries, pagination traversal, or caching;
//!   every call is a single independent request and every error bubbles up

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AuthToken, ClientConfig, ClientConfigBuilder, ConnectionMode, WorkspaceName,
    DEFAULT_BASE_URL, DEFAULT_CATALOG_SOURCE,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponseError, BasicAuth, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError,
};

// Re-export REST layer types
pub use rest::{build_path, qualify_config_entries, ConfigClient, ConfigEntry, PathParts};
