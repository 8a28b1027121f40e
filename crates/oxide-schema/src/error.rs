//! Error types for schema reconciliation.

/// Errors that can occur while reading or loading schemas.
///
/// Computing a diff never fails; errors only come from the boundaries around
/// it.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The current schema could not be read from the data source.
    #[error("Failed to read the current schema: {0}")]
    Connectivity(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A schema definition violates the model's invariants.
    #[error("Invalid schema definition: {0}")]
    InvalidDefinition(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Multiple errors occurred.
    #[error("Multiple errors occurred:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Multiple(Vec<SchemaError>),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
