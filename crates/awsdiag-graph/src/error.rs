//! Error types for the graph crate.

use thiserror::Error;

/// Errors that can occur while assembling or exporting a diagram.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A registry was asked for a component type it does not hold.
    #[error("unknown component '{name}' in category '{category}'")]
    UnknownComponent { category: String, name: String },

    /// An edge referenced a node handle that does not belong to the diagram.
    #[error("node #{0} does not exist in this diagram")]
    UnknownNode(usize),

    /// JSON export failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML export failed.
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
