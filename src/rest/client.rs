//! High-level client for the Segment Config API.
//!
//! This module provides the [`ConfigClient`] type, which pairs the operation
//! catalog in [`crate::rest::operations`] with the HTTP dispatcher to expose
//! one async method per API operation.

use crate::clients::{HttpClient, HttpError, HttpResponse};
use crate::config::ClientConfig;
use crate::rest::operations::{
    self, CreateDestinationParams, CreateSourceParams, DestinationParams, GetWorkspaceParams,
    ListCatalogDestinationsParams, ListCatalogSourcesParams, ListDestinationsParams,
    ListSourcesParams, ListTokensParams, SourceParams, UpdateDestinationParams,
};

/// Client for the Segment Config API.
///
/// Each method shapes a request through the operation catalog and dispatches
/// it; the raw [`HttpResponse`] is returned on success. Operations are
/// independent, carry no local timeout, and are never retried.
///
/// # Thread Safety
///
/// `ConfigClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use segment_config::{AuthToken, ClientConfig, ConfigClient, WorkspaceName};
///
/// let config = ClientConfig::builder()
///     .workspace(WorkspaceName::new("business").unwrap())
///     .token(AuthToken::new("token").unwrap())
///     .build()?;
/// let client = ConfigClient::new(config);
///
/// let workspaces = client.list_workspaces().await?;
/// println!("{}", workspaces.body);
/// ```
#[derive(Debug)]
pub struct ConfigClient {
    config: ClientConfig,
    http_client: HttpClient,
}

// Verify ConfigClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigClient>();
};

impl ConfigClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!(
            workspace = %config.workspace(),
            base_url = config.base_url(),
            "creating Config API client"
        );
        let http_client = HttpClient::new(&config);

        Self {
            config,
            http_client,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lists issued access tokens, authenticating with the supplied
    /// basic-auth credentials instead of the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_tokens(&self, params: &ListTokensParams) -> Result<HttpResponse, HttpError> {
        self.http_client.request(operations::list_tokens(params)).await
    }

    /// Lists workspaces visible to the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_workspaces(&self) -> Result<HttpResponse, HttpError> {
        self.http_client.request(operations::list_workspaces()).await
    }

    /// Fetches a single workspace, defaulting to the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn get_workspace(
        &self,
        params: &GetWorkspaceParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::get_workspace(params, &self.config))
            .await
    }

    /// Lists available source types from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_catalog_sources(
        &self,
        params: &ListCatalogSourcesParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::list_catalog_sources(params))
            .await
    }

    /// Fetches a single source type from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn get_catalog_source(&self, name: &str) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::get_catalog_source(name))
            .await
    }

    /// Lists available destination types from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_catalog_destinations(
        &self,
        params: &ListCatalogDestinationsParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::list_catalog_destinations(params))
            .await
    }

    /// Fetches a single destination type from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn get_catalog_destination(&self, name: &str) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::get_catalog_destination(name))
            .await
    }

    /// Creates a source in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn create_source(
        &self,
        params: &CreateSourceParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::create_source(params, &self.config))
            .await
    }

    /// Lists sources in a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_sources(&self, params: &ListSourcesParams) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::list_sources(params, &self.config))
            .await
    }

    /// Fetches a single source.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn get_source(&self, params: &SourceParams) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::get_source(params, &self.config))
            .await
    }

    /// Deletes a source.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn delete_source(&self, params: &SourceParams) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::delete_source(params, &self.config))
            .await
    }

    /// Creates a destination under a source.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn create_destination(
        &self,
        params: &CreateDestinationParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::create_destination(params, &self.config))
            .await
    }

    /// Lists destinations under a source.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn list_destinations(
        &self,
        params: &ListDestinationsParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::list_destinations(params, &self.config))
            .await
    }

    /// Fetches a single destination.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn get_destination(
        &self,
        params: &DestinationParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::get_destination(params, &self.config))
            .await
    }

    /// Partially updates a destination.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn update_destination(
        &self,
        params: &UpdateDestinationParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::update_destination(params, &self.config))
            .await
    }

    /// Deletes a destination.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or API error responses.
    pub async fn delete_destination(
        &self,
        params: &DestinationParams,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client
            .request(operations::delete_destination(params, &self.config))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceName;

    fn test_client() -> ConfigClient {
        let config = ClientConfig::builder()
            .workspace(WorkspaceName::new("business").unwrap())
            .build()
            .unwrap();
        ConfigClient::new(config)
    }

    #[test]
    fn test_client_exposes_config() {
        let client = test_client();
        assert_eq!(client.config().workspace().as_ref(), "business");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigClient>();
    }
}
