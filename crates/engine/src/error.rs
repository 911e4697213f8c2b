//! Error types for host API loading

/// Error type for host API loading operations
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The loader passed a null host API table
    #[error("Host API table is null")]
    NullTable,

    /// The shim was built against a different host API layout
    #[error("Host API version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: u32, found: u32 },

    /// The shim's view of the table size differs from ours
    #[error("Host API size mismatch: expected {expected} bytes, got {found}")]
    SizeMismatch { expected: u32, found: u32 },

    /// A virtual table address could not be resolved by the shim
    #[error("Virtual table not resolved: {0}")]
    MissingVTable(&'static str),

    /// Host already initialized
    #[error("Host already initialized")]
    AlreadyInitialized,
}
