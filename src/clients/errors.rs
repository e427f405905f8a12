//! HTTP-specific error types for the Config API client.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: non-2xx responses carrying a structured error body
//! - [`InvalidHttpRequestError`]: requests that fail validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above plus
//!   transport failures
//!
//! Every error bubbles to the caller unchanged; nothing is retried or
//! swallowed. A non-2xx response whose body does not carry the API's
//! structured `{error, code}` shape surfaces as the underlying transport
//! status error instead of an [`ApiResponseError`].
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {} ({}): {}", e.status_code, e.error_code.as_deref().unwrap_or("-"), e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Transport(e)) => println!("Transport error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Error returned when the API responds with a non-2xx status and a
/// structured error body.
///
/// The Config API reports failures as `{"error": "...", "code": ...}`.
/// The `message` field carries the body's `error` value verbatim.
///
/// # Example
///
/// ```rust
/// use segment_config::clients::ApiResponseError;
/// use std::collections::HashMap;
///
/// let error = ApiResponseError {
///     message: "workspace not found".to_string(),
///     error_code: Some("5".to_string()),
///     status_code: 404,
///     headers: HashMap::new(),
/// };
///
/// assert_eq!(error.to_string(), "workspace not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The error message from the body's `error` field.
    pub message: String,
    /// The API error code from the body's `code` field, if present.
    pub error_code: Option<String>,
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was built without a payload.
    #[error("Cannot use {method} without specifying a payload.")]
    MissingPayload {
        /// The HTTP method that requires a payload.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types at API boundaries.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API returned a non-2xx response with a structured error body.
    #[error(transparent)]
    Api(#[from] ApiResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Transport failure, or a non-2xx response with no structured error
    /// body (surfaced unchanged).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_error_displays_message() {
        let error = ApiResponseError {
            message: "destination not found".to_string(),
            error_code: Some("5".to_string()),
            status_code: 404,
            headers: HashMap::new(),
        };

        assert_eq!(error.to_string(), "destination not found");
        assert_eq!(error.status_code, 404);
        assert_eq!(error.error_code.as_deref(), Some("5"));
    }

    #[test]
    fn test_invalid_request_error_missing_payload() {
        let error = InvalidHttpRequestError::MissingPayload {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying a payload.");
    }

    #[test]
    fn test_http_error_wraps_api_error_transparently() {
        let error: HttpError = ApiResponseError {
            message: "bad request".to_string(),
            error_code: None,
            status_code: 400,
            headers: HashMap::new(),
        }
        .into();

        assert_eq!(error.to_string(), "bad request");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiResponseError {
            message: "test".to_string(),
            error_code: None,
            status_code: 400,
            headers: HashMap::new(),
        };
        let _ = api_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingPayload {
            method: "patch".to_string(),
        };
        let _ = invalid_error;
    }
}
