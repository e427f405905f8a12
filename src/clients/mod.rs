//! HTTP client types for Config API communication.
//!
//! This module provides the transport layer of the crate: the request
//! descriptor produced by the operation builders, the response type, and
//! the dispatcher that executes calls against the API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async dispatcher for API communication
//! - [`HttpRequest`]: A transport-ready request descriptor
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`BasicAuth`]: Basic-auth override for the token-issuance endpoint
//! - [`HttpError`]: Unified error type for transport and API failures
//!
//! # Authentication
//!
//! The dispatcher attaches `Authorization: Bearer <token>` to every request
//! whose URL does not contain `access-tokens`, provided a token is configured
//! and no `Authorization` header or basic-auth override is already present.
//!
//! # Example
//!
//! ```rust,ignore
//! use segment_config::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config);
//! let request = HttpRequest::builder(HttpMethod::Get, "workspaces")
//!     .build()
//!     .unwrap();
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiResponseError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{BasicAuth, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
