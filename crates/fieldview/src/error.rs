//! Error types.

use crate::view::ViewId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while projecting or validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The requested view has no tag in the active configuration.
    #[error("View '{view}' has no access tag configured")]
    UnknownView { view: ViewId },

    /// Fields carry tags that must not appear together.
    #[error("Conflicting access annotations on {record}: {}", .fields.join(", "))]
    ConflictingAnnotation {
        record: &'static str,
        fields: Vec<String>,
    },
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while loading a [`ViewConfig`](crate::ViewConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to merge configuration: {0}")]
    MergeError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
