//! Error types for the Curio library.

use thiserror::Error;

/// Main error type for Curio operations.
#[derive(Debug, Error)]
pub enum CurioError {
    /// The target catalogue does not exist. This is the only hard failure
    /// during analysis; every other fetch degrades to a fallback.
    #[error("catalogue '{0}' not found")]
    CatalogueNotFound(String),

    /// A storage collaborator failed.
    #[error("storage error: {0}")]
    Store(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Curio operations.
pub type Result<T> = std::result::Result<T, CurioError>;
