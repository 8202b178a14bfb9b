//! Error types

/// Storage backend failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by roller operations
#[derive(Debug, thiserror::Error)]
pub enum RollerError {
    /// Key is not in the catalog
    #[error("unknown item key: {0}")]
    InvalidKey(String),

    /// Snapshot present but unparsable or schema-invalid
    #[error("unreadable snapshot: {0}")]
    PersistenceRead(#[source] serde_json::Error),

    /// Snapshot could not be written; in-memory state is kept
    #[error("snapshot not saved: {0}")]
    PersistenceWrite(#[from] StoreError),

    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}
