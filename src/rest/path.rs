//! Resource path construction for the Config API.
//!
//! The Config API addresses every resource through a fixed hierarchy:
//! workspaces contain sources, sources contain destinations. A resource path
//! is the slash-separated identifier used both as a URL path and as the
//! resource's canonical `name` field:
//!
//! ```text
//! workspaces/{workspace}/sources/{source}/destinations/{destination}
//! ```
//!
//! [`build_path`] derives such a path from whichever identifiers are
//! present; omitted levels simply shorten the result. [`parent_collection`]
//! strips the final segment back off, which is how create operations derive
//! the collection URL from the full path of the resource being created —
//! building the path once guarantees URL and `name` field never disagree.
//!
//! # Example
//!
//! ```rust
//! use segment_config::rest::{build_path, parent_collection, PathParts};
//!
//! let path = build_path(&PathParts {
//!     workspace: Some("business"),
//!     source: Some("ios"),
//!     destination: Some("webhook"),
//!     append: None,
//! });
//! assert_eq!(path, "workspaces/business/sources/ios/destinations/webhook");
//! assert_eq!(
//!     parent_collection(&path),
//!     "workspaces/business/sources/ios/destinations"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Optional identifiers from which a resource path is derived.
///
/// Segments are joined in fixed order workspace, source, destination,
/// append. A level is included only when its identifier is present and
/// non-empty; `append` lands verbatim as the final segment.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathParts<'a> {
    /// Workspace identifier, emitted as `workspaces/<id>`.
    pub workspace: Option<&'a str>,
    /// Source identifier, emitted as `sources/<id>`.
    pub source: Option<&'a str>,
    /// Destination identifier, emitted as `destinations/<id>`.
    pub destination: Option<&'a str>,
    /// Literal trailing segment, emitted as-is.
    pub append: Option<&'a str>,
}

/// Builds a resource path from the present identifiers.
///
/// Pure and infallible: absent or empty identifiers shorten the result, and
/// all-absent input yields the empty string, which callers must tolerate.
#[must_use]
pub fn build_path(parts: &PathParts<'_>) -> String {
    let mut segments: Vec<&str> = Vec::new();

    if let Some(workspace) = parts.workspace.filter(|id| !id.is_empty()) {
        segments.push("workspaces");
        segments.push(workspace);
    }
    if let Some(source) = parts.source.filter(|id| !id.is_empty()) {
        segments.push("sources");
        segments.push(source);
    }
    if let Some(destination) = parts.destination.filter(|id| !id.is_empty()) {
        segments.push("destinations");
        segments.push(destination);
    }
    if let Some(append) = parts.append.filter(|segment| !segment.is_empty()) {
        segments.push(append);
    }

    segments.join("/")
}

/// Strips the final segment from a resource path, yielding the parent
/// collection path.
///
/// A path without a `/` has no parent; the result is the empty string.
#[must_use]
pub fn parent_collection(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

/// One destination configuration field.
///
/// The remote API addresses configuration fields by full resource path:
/// the stored `name` must be `<destinationPath>/config/<fieldName>`. Callers
/// naturally supply the short field name; [`qualify_config_entries`] removes
/// that friction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Field name, short (`apiKey`) or fully qualified
    /// (`workspaces/w/sources/s/destinations/d/config/apiKey`).
    pub name: String,
    /// Field value, passed through untouched.
    pub value: serde_json::Value,
}

impl ConfigEntry {
    /// Creates an entry from a field name and value.
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Qualifies configuration field names against a destination path.
///
/// Each entry whose `name` does not already contain `path` is rewritten to
/// `<path>/config/<name>`; entries that contain it are passed through, which
/// makes the function idempotent.
///
/// Detection is substring containment rather than prefix or exact match: a
/// field name that happens to contain the path text anywhere counts as
/// already qualified. That looseness is part of the contract.
#[must_use]
pub fn qualify_config_entries(entries: &[ConfigEntry], path: &str) -> Vec<ConfigEntry> {
    entries
        .iter()
        .map(|entry| {
            if entry.name.contains(path) {
                entry.clone()
            } else {
                ConfigEntry {
                    name: format!("{path}/config/{}", entry.name),
                    value: entry.value.clone(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESTINATION_PATH: &str = "workspaces/w/sources/s/destinations/d";

    #[test]
    fn test_build_path_with_no_parts_is_empty() {
        assert_eq!(build_path(&PathParts::default()), "");
    }

    #[test]
    fn test_build_path_workspace_only() {
        let path = build_path(&PathParts {
            workspace: Some("w"),
            ..PathParts::default()
        });
        assert_eq!(path, "workspaces/w");
    }

    #[test]
    fn test_build_path_workspace_and_source() {
        let path = build_path(&PathParts {
            workspace: Some("w"),
            source: Some("s"),
            ..PathParts::default()
        });
        assert_eq!(path, "workspaces/w/sources/s");
    }

    #[test]
    fn test_build_path_full_hierarchy() {
        let path = build_path(&PathParts {
            workspace: Some("w"),
            source: Some("s"),
            destination: Some("d"),
            append: None,
        });
        assert_eq!(path, DESTINATION_PATH);
    }

    #[test]
    fn test_build_path_append_is_always_last() {
        let path = build_path(&PathParts {
            workspace: Some("w"),
            append: Some("sources"),
            ..PathParts::default()
        });
        assert_eq!(path, "workspaces/w/sources");

        let path = build_path(&PathParts {
            workspace: Some("w"),
            source: Some("s"),
            append: Some("destinations"),
            ..PathParts::default()
        });
        assert_eq!(path, "workspaces/w/sources/s/destinations");
    }

    #[test]
    fn test_build_path_append_alone() {
        let path = build_path(&PathParts {
            append: Some("catalog"),
            ..PathParts::default()
        });
        assert_eq!(path, "catalog");
    }

    #[test]
    fn test_build_path_skips_empty_identifiers() {
        let path = build_path(&PathParts {
            workspace: Some(""),
            source: Some("s"),
            ..PathParts::default()
        });
        assert_eq!(path, "sources/s");
    }

    #[test]
    fn test_build_path_omitted_levels_leave_no_placeholder() {
        // Destination without a source still produces well-formed segments.
        let path = build_path(&PathParts {
            workspace: Some("w"),
            destination: Some("d"),
            ..PathParts::default()
        });
        assert_eq!(path, "workspaces/w/destinations/d");
        assert!(!path.contains("//"));
    }

    #[test]
    fn test_parent_collection_strips_final_segment() {
        assert_eq!(
            parent_collection(DESTINATION_PATH),
            "workspaces/w/sources/s/destinations"
        );
        assert_eq!(parent_collection("workspaces/w"), "workspaces");
    }

    #[test]
    fn test_parent_collection_of_single_segment_is_empty() {
        assert_eq!(parent_collection("workspaces"), "");
        assert_eq!(parent_collection(""), "");
    }

    #[test]
    fn test_qualify_prefixes_short_names() {
        let entries = vec![ConfigEntry::new("apiKey", "x")];
        let qualified = qualify_config_entries(&entries, DESTINATION_PATH);

        assert_eq!(
            qualified,
            vec![ConfigEntry::new(
                "workspaces/w/sources/s/destinations/d/config/apiKey",
                "x"
            )]
        );
    }

    #[test]
    fn test_qualify_is_idempotent() {
        let entries = vec![
            ConfigEntry::new("apiKey", "x"),
            ConfigEntry::new("sharedSecret", serde_json::json!(null)),
        ];
        let once = qualify_config_entries(&entries, DESTINATION_PATH);
        let twice = qualify_config_entries(&once, DESTINATION_PATH);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_qualify_passes_values_through_untouched() {
        let entries = vec![ConfigEntry::new(
            "hooks",
            serde_json::json!([{"hook": "https://example.com"}]),
        )];
        let qualified = qualify_config_entries(&entries, DESTINATION_PATH);

        assert_eq!(qualified[0].value, entries[0].value);
    }

    #[test]
    fn test_qualify_uses_substring_containment_not_prefix() {
        // A name that merely contains the path text counts as already
        // qualified, even when the path is not a prefix. Known looseness,
        // kept on purpose.
        let entries = vec![ConfigEntry::new(
            format!("oddly/{DESTINATION_PATH}/embedded"),
            "x",
        )];
        let qualified = qualify_config_entries(&entries, DESTINATION_PATH);

        assert_eq!(qualified[0].name, entries[0].name);
    }

    #[test]
    fn test_config_entry_serializes_as_name_value_pair() {
        let entry = ConfigEntry::new("apiKey", "x");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json, serde_json::json!({"name": "apiKey", "value": "x"}));
    }
}
