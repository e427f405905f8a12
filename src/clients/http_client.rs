//! HTTP dispatcher for Config API communication.
//!
//! This module provides the [`HttpClient`] type, which consumes the request
//! descriptors produced by the operation builders, injects bearer-token
//! authentication, executes the HTTP call, and normalizes failures into
//! [`HttpError`].

use std::collections::HashMap;

use crate::clients::errors::{ApiResponseError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP dispatcher for the Config API.
///
/// The client handles:
/// - Full URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Bearer-token injection, except for the token-issuance endpoint
/// - Payload placement: query parameters for GET, JSON body otherwise
/// - Error normalization for structured API error bodies
///
/// It performs no retries, pagination, or caching; each call is a single
/// independent request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use segment_config::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "workspaces")
///     .build()
///     .unwrap();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Bearer token, if configured.
    token: Option<String>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("Segment Config API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            token: config.token().map(|t| t.as_ref().to_string()),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the Config API.
    ///
    /// The bearer token is attached as `Authorization: Bearer <token>` unless
    /// the URL targets the token-issuance endpoint, an `Authorization` header
    /// is already present, or a basic-auth override is set (which takes
    /// precedence).
    ///
    /// On success the raw response is returned unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Transport`)
    /// - A non-2xx response carries a structured `{error, code}` body (`Api`)
    /// - A non-2xx response carries no structured body (`Transport`, the
    ///   underlying status error unchanged)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Bearer injection. The token-issuance endpoint authenticates with
        // basic auth, and an explicit Authorization header always wins.
        let authorization_set = headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("authorization"));
        if !url.contains("access-tokens") && request.auth.is_none() && !authorization_set {
            if let Some(token) = &self.token {
                headers.insert("Authorization".to_string(), format!("Bearer {token}"));
            }
        }

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // GET payloads become query parameters, everything else a JSON body.
        if let Some(payload) = &request.payload {
            req_builder = match request.method {
                HttpMethod::Get => req_builder.query(&query_pairs(payload)),
                _ => req_builder.json(payload),
            };
        }

        if let Some(auth) = &request.auth {
            req_builder = req_builder.basic_auth(
                auth.username.as_deref().unwrap_or_default(),
                auth.password.as_deref(),
            );
        }

        tracing::debug!(method = %request.method, path = %request.path, "dispatching Config API request");

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let status_error = res.error_for_status_ref().err();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        match status_error {
            None => Ok(HttpResponse::new(status, res_headers, body)),
            Some(status_error) => {
                // Normalize only the API's structured error shape; anything
                // else surfaces as the original status error.
                if let Some(message) = body.get("error").and_then(serde_json::Value::as_str) {
                    tracing::warn!(status, message, "Config API returned an error response");
                    Err(ApiResponseError {
                        message: message.to_string(),
                        error_code: body.get("code").map(scalar_string),
                        status_code: status,
                        headers: res_headers,
                    }
                    .into())
                } else {
                    Err(HttpError::Transport(status_error))
                }
            }
        }
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Flattens a JSON payload object into query parameter pairs.
///
/// Null entries are dropped, matching the behavior of omitting optional
/// pagination parameters. Non-string scalars serialize to their JSON text.
fn query_pairs(payload: &serde_json::Value) -> Vec<(String, String)> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };

    object
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), scalar_string(value)))
        .collect()
}

/// Renders a JSON scalar as its plain string form (no quotes for strings).
fn scalar_string(value: &serde_json::Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}
