//! REST layer for the Segment Config API.
//!
//! This module contains the two components with actual design decisions:
//!
//! - [`path`]: derivation of hierarchical resource paths
//!   (`workspaces/{w}/sources/{s}/destinations/{d}`) from partial
//!   identifiers, and the configuration-field-name qualification rule
//! - [`operations`]: the fixed catalog of operations, each mapping a
//!   parameter struct onto an HTTP verb, path, and payload
//!
//! [`ConfigClient`] wires both to the HTTP dispatcher.

pub mod client;
pub mod operations;
pub mod path;

pub use client::ConfigClient;
pub use path::{build_path, parent_collection, qualify_config_entries, ConfigEntry, PathParts};
