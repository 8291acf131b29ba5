//! Error types for FreeFuse Hub

use std::path::PathBuf;

use thiserror::Error;

use crate::data_types::ResourceKind;
use crate::selection::ViewMode;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read. The loader recovers from this by
    /// substituting sample rows; it only escapes through `read_resource`.
    #[error("Resource unavailable: {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The view mode is not offered by the section
    #[error("View '{mode}' is not available for section '{section}'")]
    InvalidView { section: ResourceKind, mode: ViewMode },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// Filter argument that is not of the form `Field=value`
    #[error("Invalid filter '{0}', expected Field=value")]
    InvalidFilter(String),

    /// CSV output was asked for a view that isn't a table
    #[error("CSV export needs the table view, got {0}")]
    ExportUnsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The load sequence failed outside per-resource handling
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
