//! HTTP request types for the Config API client.
//!
//! This module provides the [`HttpRequest`] type, the transport-ready
//! request descriptor produced by the operation builders in
//! [`crate::rest::operations`], along with a builder for constructing
//! requests by hand.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Config API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Basic-auth credentials attached to a request as an auth override.
///
/// Only the token-listing endpoint uses this. Fields are populated
/// individually: supplying only a username leaves the password unset.
/// When an override is present it takes precedence over the configured
/// bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicAuth {
    /// Username, if supplied.
    pub username: Option<String>,
    /// Password, if supplied.
    pub password: Option<String>,
}

impl BasicAuth {
    /// Returns `true` if neither field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// A transport-ready request descriptor for the Config API.
///
/// Each operation builder produces one of these; the
/// [`HttpClient`](crate::clients::HttpClient) consumes it exactly once.
/// The `payload` is sent as query parameters for GET requests and as a
/// JSON body for every other method.
///
/// # Example
///
/// ```rust
/// use segment_config::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "workspaces/my-workspace/sources")
///     .payload(json!({"source": {"name": "workspaces/my-workspace/sources/rust"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The resource path, relative to the base URL, without a leading slash.
    pub path: String,
    /// Query parameters (GET) or JSON body (other methods).
    pub payload: Option<serde_json::Value>,
    /// Basic-auth override; takes precedence over the bearer token.
    pub auth: Option<BasicAuth>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingPayload`] if `method` is
    /// `Post` or `Patch` but no payload is set.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.method, HttpMethod::Post | HttpMethod::Patch) && self.payload.is_none() {
            return Err(InvalidHttpRequestError::MissingPayload {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    payload: Option<serde_json::Value>,
    auth: Option<BasicAuth>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: None,
            auth: None,
            extra_headers: None,
        }
    }

    /// Sets the request payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<serde_json::Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets the basic-auth override.
    #[must_use]
    pub fn auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            payload: self.payload,
            auth: self.auth,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpRequest>();
    assert_send_sync::<BasicAuth>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "workspaces")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "workspaces");
        assert!(request.payload.is_none());
        assert!(request.auth.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "workspaces/w/sources")
            .payload(json!({"source": {"name": "workspaces/w/sources/s"}}))
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.payload.is_some());
    }

    #[test]
    fn test_verify_requires_payload_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "workspaces/w/sources").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingPayload { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_payload_for_patch() {
        let result =
            HttpRequest::builder(HttpMethod::Patch, "workspaces/w/sources/s/destinations/d")
                .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingPayload { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_delete_does_not_require_payload() {
        let request = HttpRequest::builder(HttpMethod::Delete, "workspaces/w/sources/s")
            .build()
            .unwrap();

        assert!(request.payload.is_none());
    }

    #[test]
    fn test_builder_with_auth_and_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "access-tokens")
            .auth(BasicAuth {
                username: Some("user".to_string()),
                password: None,
            })
            .header("X-Custom", "value")
            .build()
            .unwrap();

        let auth = request.auth.unwrap();
        assert_eq!(auth.username.as_deref(), Some("user"));
        assert!(auth.password.is_none());
        assert_eq!(
            request.extra_headers.unwrap().get("X-Custom"),
            Some(&"value".to_string())
        );
    }

    #[test]
    fn test_basic_auth_is_empty() {
        assert!(BasicAuth::default().is_empty());
        assert!(!BasicAuth {
            username: Some("user".to_string()),
            password: None,
        }
        .is_empty());
    }
}
