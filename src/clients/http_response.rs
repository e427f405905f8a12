//! HTTP response type for the Config API client.
//!
//! On success the raw transport response is handed back to the caller
//! unmodified: status code, lower-cased headers, and the JSON body.

use std::collections::HashMap;

/// A parsed response from the Config API.
///
/// # Example
///
/// ```rust
/// use segment_config::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     HashMap::new(),
///     serde_json::json!({"workspaces": []}),
/// );
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON. Empty bodies parse to `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively since headers are
    /// stored lower-cased.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify HttpResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(name: &str, value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_for_2xx() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse::new(status, HashMap::new(), serde_json::json!({}));
            assert!(response.is_ok(), "expected {status} to be ok");
        }
    }

    #[test]
    fn test_is_not_ok_outside_2xx() {
        for status in [199, 301, 404, 500] {
            let response = HttpResponse::new(status, HashMap::new(), serde_json::json!({}));
            assert!(!response.is_ok(), "expected {status} to not be ok");
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers_with("x-request-id", "req-123"),
            serde_json::json!({}),
        );

        assert_eq!(response.header("X-Request-Id"), Some("req-123"));
        assert_eq!(response.header("x-request-id"), Some("req-123"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_body_is_preserved() {
        let body = serde_json::json!({"source": {"name": "workspaces/w/sources/s"}});
        let response = HttpResponse::new(200, HashMap::new(), body.clone());

        assert_eq!(response.body, body);
    }
}
