//! Error types for the theming layer.
//!
//! Theme resolution, bundle building and icon derivation never fail. The
//! only fallible operations are catalog lookups and document export.

use awsdiag_graph::GraphError;

/// Errors raised by [`AwsStyle`](crate::AwsStyle) lookups and exports.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// No registry exists for the requested component category.
    #[error("unknown component category '{0}'")]
    UnknownCategory(String),

    /// Error from the construction layer (unknown component, bad node handle).
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// JSON export failed.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML export failed.
    #[error("yaml export failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for theming operations.
pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = StyleError::UnknownCategory("quantum".into());
        assert_eq!(err.to_string(), "unknown component category 'quantum'");
    }

    #[test]
    fn test_graph_error_is_transparent() {
        let err: StyleError = GraphError::UnknownNode(3).into();
        assert_eq!(err.to_string(), GraphError::UnknownNode(3).to_string());
    }
}
