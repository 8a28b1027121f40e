//! Error types for SQLite introspection.

/// Errors that can occur while reading a SQLite schema.
#[derive(Debug, thiserror::Error)]
pub enum IntrospectError {
    /// Database error while connecting or querying metadata.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The catalog (attached schema) name cannot be used in a query.
    #[error("Invalid catalog name: '{0}'")]
    Catalog(String),
}

/// Result type for introspection.
pub type Result<T> = std::result::Result<T, IntrospectError>;
