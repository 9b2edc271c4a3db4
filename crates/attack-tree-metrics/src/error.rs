//! Error types for attack tree construction.
//!
//! Metric queries never fail: an unknown root, a disconnected node or an
//! all-infeasible tree are all represented in the shape of the returned
//! value. Errors are confined to the fallible edges of the crate, namely
//! building a snapshot, decoding node records and validating configuration.

use thiserror::Error;

/// Result type alias for attack tree construction.
pub type AttackTreeResult<T> = Result<T, AttackTreeError>;

/// Error type for snapshot construction and configuration.
#[derive(Error, Debug)]
pub enum AttackTreeError {
    // ========== Snapshot Errors ==========
    /// Two node records share the same id.
    #[error("Duplicate node ID: {0}")]
    DuplicateNode(String),

    /// Invalid input provided to a constructor.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Serialization Errors ==========
    /// Node or configuration records could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error while reading a snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AttackTreeError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json errors include line/column info in to_string()
        AttackTreeError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(AttackTreeError: Send, Sync, std::error::Error);
