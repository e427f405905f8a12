//! The operation catalog: one request builder per Config API operation.
//!
//! Each function here is a pure mapping from a parameter struct (plus the
//! [`ClientConfig`] where defaults apply) to a transport-ready
//! [`HttpRequest`]. Nothing is validated locally beyond what the request
//! builder enforces; malformed identifiers are left to the API to reject.
//!
//! Path-bearing operations accept a `path` override that bypasses derivation
//! entirely. When deriving, an omitted `workspace` falls back to the
//! configured default workspace.
//!
//! Create and update operations build the full resource path once (including
//! the new resource's own identifier segment) and derive the collection URL
//! by stripping that final segment back off, so the request URL and the
//! payload's `name` field can never disagree.

use serde_json::json;

use crate::clients::{BasicAuth, HttpMethod, HttpRequest};
use crate::config::{ClientConfig, ConnectionMode};
use crate::rest::path::{
    build_path, parent_collection, qualify_config_entries, ConfigEntry, PathParts,
};

/// Parameters for [`list_tokens`].
#[derive(Clone, Debug, Default)]
pub struct ListTokensParams {
    /// Basic-auth username, attached only if provided.
    pub username: Option<String>,
    /// Basic-auth password, attached only if provided.
    pub password: Option<String>,
}

/// Parameters for [`get_workspace`].
#[derive(Clone, Debug, Default)]
pub struct GetWorkspaceParams {
    /// Workspace name; defaults to the configured workspace.
    pub name: Option<String>,
    /// Precomputed path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`list_catalog_sources`].
#[derive(Clone, Debug, Default)]
pub struct ListCatalogSourcesParams {
    /// Page size for pagination.
    pub page_size: Option<u32>,
    /// Opaque continuation token from a previous page.
    pub page_token: Option<String>,
}

/// Parameters for [`list_catalog_destinations`].
#[derive(Clone, Debug, Default)]
pub struct ListCatalogDestinationsParams {
    /// Page size for pagination.
    pub page_size: Option<u32>,
    /// Opaque continuation token from a previous page.
    pub page_token: Option<String>,
}

/// Parameters for [`create_source`].
#[derive(Clone, Debug, Default)]
pub struct CreateSourceParams {
    /// Name of the source to create.
    pub name: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Catalog source type; defaults to the configured catalog source.
    pub catalog_name: Option<String>,
    /// Precomputed full source path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`list_sources`].
#[derive(Clone, Debug, Default)]
pub struct ListSourcesParams {
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Page size for pagination.
    pub page_size: Option<u32>,
    /// Opaque continuation token from a previous page.
    pub page_token: Option<String>,
    /// Precomputed collection path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`get_source`] and [`delete_source`].
#[derive(Clone, Debug, Default)]
pub struct SourceParams {
    /// Source name.
    pub source: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Precomputed full source path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`create_destination`].
#[derive(Clone, Debug, Default)]
pub struct CreateDestinationParams {
    /// Name of the destination to create.
    pub destination: String,
    /// Parent source name.
    pub source: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Configuration fields; short names are qualified against the
    /// destination path.
    pub config: Vec<ConfigEntry>,
    /// Connection mode; defaults to the configured mode.
    pub connection_mode: Option<ConnectionMode>,
    /// Whether the destination starts enabled; defaults to `true`.
    pub enabled: Option<bool>,
    /// Precomputed full destination path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`list_destinations`].
#[derive(Clone, Debug, Default)]
pub struct ListDestinationsParams {
    /// Parent source name.
    pub source: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Page size for pagination.
    pub page_size: Option<u32>,
    /// Opaque continuation token from a previous page.
    pub page_token: Option<String>,
    /// Precomputed collection path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`get_destination`] and [`delete_destination`].
#[derive(Clone, Debug, Default)]
pub struct DestinationParams {
    /// Destination name.
    pub destination: String,
    /// Parent source name.
    pub source: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Precomputed full destination path override, used verbatim.
    pub path: Option<String>,
}

/// Parameters for [`update_destination`].
///
/// Partial-update semantics: `enabled` is applied only when explicitly set,
/// and the configuration list only when non-empty. Omitted fields are left
/// untouched server-side via the update mask.
#[derive(Clone, Debug, Default)]
pub struct UpdateDestinationParams {
    /// Destination name.
    pub destination: String,
    /// Parent source name.
    pub source: String,
    /// Workspace; defaults to the configured workspace.
    pub workspace: Option<String>,
    /// Configuration fields to update; short names are qualified against
    /// the destination path.
    pub config: Vec<ConfigEntry>,
    /// New enabled state, applied only when set.
    pub enabled: Option<bool>,
    /// Precomputed full destination path override, used verbatim.
    pub path: Option<String>,
}

/// GET `/access-tokens`, listing issued tokens.
///
/// Basic-auth credentials are attached as an auth override only when at
/// least one of them is provided; the override takes precedence over the
/// bearer token.
#[must_use]
pub fn list_tokens(params: &ListTokensParams) -> HttpRequest {
    let auth = if params.username.is_some() || params.password.is_some() {
        Some(BasicAuth {
            username: params.username.clone(),
            password: params.password.clone(),
        })
    } else {
        None
    };

    HttpRequest {
        method: HttpMethod::Get,
        path: "access-tokens".to_string(),
        payload: None,
        auth,
        extra_headers: None,
    }
}

/// GET `/workspaces`, listing workspaces visible to the token.
#[must_use]
pub fn list_workspaces() -> HttpRequest {
    get("workspaces")
}

/// GET `/workspaces/<name>`, fetching a single workspace.
#[must_use]
pub fn get_workspace(params: &GetWorkspaceParams, config: &ClientConfig) -> HttpRequest {
    let path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.name.as_deref(), config)),
            ..PathParts::default()
        })
    });

    get(path)
}

/// GET `/catalog/sources`, listing available source types.
#[must_use]
pub fn list_catalog_sources(params: &ListCatalogSourcesParams) -> HttpRequest {
    HttpRequest {
        payload: Some(page_payload(params.page_size, params.page_token.as_deref())),
        ..get("catalog/sources")
    }
}

/// GET `/catalog/sources/<name>`, fetching one source type.
#[must_use]
pub fn get_catalog_source(name: &str) -> HttpRequest {
    get(format!("catalog/sources/{name}"))
}

/// GET `/catalog/destinations`, listing available destination types.
#[must_use]
pub fn list_catalog_destinations(params: &ListCatalogDestinationsParams) -> HttpRequest {
    HttpRequest {
        payload: Some(page_payload(params.page_size, params.page_token.as_deref())),
        ..get("catalog/destinations")
    }
}

/// GET `/catalog/destinations/<name>`, fetching one destination type.
#[must_use]
pub fn get_catalog_destination(name: &str) -> HttpRequest {
    get(format!("catalog/destinations/{name}"))
}

/// POST `workspaces/<ws>/sources`, creating a source.
///
/// The payload's `source.name` carries the full resource path of the new
/// source; the URL targets the parent collection.
#[must_use]
pub fn create_source(params: &CreateSourceParams, config: &ClientConfig) -> HttpRequest {
    let full_path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.name),
            ..PathParts::default()
        })
    });

    HttpRequest {
        method: HttpMethod::Post,
        path: parent_collection(&full_path).to_string(),
        payload: Some(json!({
            "source": {
                "name": full_path,
                "catalog_name": params
                    .catalog_name
                    .as_deref()
                    .unwrap_or_else(|| config.catalog_source()),
            },
        })),
        auth: None,
        extra_headers: None,
    }
}

/// GET `workspaces/<ws>/sources`, listing sources in a workspace.
#[must_use]
pub fn list_sources(params: &ListSourcesParams, config: &ClientConfig) -> HttpRequest {
    let path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            append: Some("sources"),
            ..PathParts::default()
        })
    });

    HttpRequest {
        payload: Some(page_payload(params.page_size, params.page_token.as_deref())),
        ..get(path)
    }
}

/// GET the full source path, fetching a single source.
#[must_use]
pub fn get_source(params: &SourceParams, config: &ClientConfig) -> HttpRequest {
    get(source_path(params, config))
}

/// DELETE the full source path.
#[must_use]
pub fn delete_source(params: &SourceParams, config: &ClientConfig) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Delete,
        ..get(source_path(params, config))
    }
}

/// POST `workspaces/<ws>/sources/<src>/destinations`, creating a destination.
///
/// Short configuration field names are qualified against the full
/// destination path; `connection_mode` defaults from the configuration and
/// `enabled` defaults to `true`.
#[must_use]
pub fn create_destination(params: &CreateDestinationParams, config: &ClientConfig) -> HttpRequest {
    let full_path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.source),
            destination: Some(&params.destination),
            append: None,
        })
    });

    let entries = qualify_config_entries(&params.config, &full_path);

    HttpRequest {
        method: HttpMethod::Post,
        path: parent_collection(&full_path).to_string(),
        payload: Some(json!({
            "destination": {
                "name": full_path,
                "config": entries,
                "connection_mode": params.connection_mode.unwrap_or_else(|| config.connection_mode()),
                "enabled": params.enabled.unwrap_or(true),
            },
        })),
        auth: None,
        extra_headers: None,
    }
}

/// GET `workspaces/<ws>/sources/<src>/destinations`, listing destinations.
#[must_use]
pub fn list_destinations(params: &ListDestinationsParams, config: &ClientConfig) -> HttpRequest {
    let path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.source),
            append: Some("destinations"),
            ..PathParts::default()
        })
    });

    HttpRequest {
        payload: Some(page_payload(params.page_size, params.page_token.as_deref())),
        ..get(path)
    }
}

/// GET the full destination path, fetching a single destination.
#[must_use]
pub fn get_destination(params: &DestinationParams, config: &ClientConfig) -> HttpRequest {
    get(destination_path(params, config))
}

/// PATCH the full destination path with partial-update semantics.
///
/// `update_mask.paths` names `destination.config` only when the
/// configuration list is non-empty and `destination.enabled` only when
/// `enabled` was explicitly supplied.
#[must_use]
pub fn update_destination(params: &UpdateDestinationParams, config: &ClientConfig) -> HttpRequest {
    let full_path = params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.source),
            destination: Some(&params.destination),
            append: None,
        })
    });

    let mut destination = serde_json::Map::new();
    let mut mask_paths: Vec<&str> = Vec::new();

    let entries = qualify_config_entries(&params.config, &full_path);
    if !entries.is_empty() {
        destination.insert("config".to_string(), json!(entries));
        mask_paths.push("destination.config");
    }
    if let Some(enabled) = params.enabled {
        destination.insert("enabled".to_string(), json!(enabled));
        mask_paths.push("destination.enabled");
    }

    HttpRequest {
        method: HttpMethod::Patch,
        path: full_path,
        payload: Some(json!({
            "destination": destination,
            "update_mask": {"paths": mask_paths},
        })),
        auth: None,
        extra_headers: None,
    }
}

/// DELETE the full destination path.
#[must_use]
pub fn delete_destination(params: &DestinationParams, config: &ClientConfig) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Delete,
        ..get(destination_path(params, config))
    }
}

fn get(path: impl Into<String>) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path: path.into(),
        payload: None,
        auth: None,
        extra_headers: None,
    }
}

fn page_payload(page_size: Option<u32>, page_token: Option<&str>) -> serde_json::Value {
    json!({
        "page_size": page_size,
        "page_token": page_token,
    })
}

fn workspace_or_default<'a>(workspace: Option<&'a str>, config: &'a ClientConfig) -> &'a str {
    workspace.unwrap_or_else(|| config.workspace().as_ref())
}

fn source_path(params: &SourceParams, config: &ClientConfig) -> String {
    params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.source),
            ..PathParts::default()
        })
    })
}

fn destination_path(params: &DestinationParams, config: &ClientConfig) -> String {
    params.path.clone().unwrap_or_else(|| {
        build_path(&PathParts {
            workspace: Some(workspace_or_default(params.workspace.as_deref(), config)),
            source: Some(&params.source),
            destination: Some(&params.destination),
            append: None,
        })
    })
}
