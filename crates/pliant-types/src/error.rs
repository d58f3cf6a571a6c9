//! Error types for the Pliant core.
//!
//! All crates return `PliantResult<T>` from fallible operations.
//! Recoverable parse problems (unknown records, short faces) are not
//! errors; they are absorbed by the parser and counted in its report.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the Pliant core.
#[derive(Debug, Error)]
pub enum PliantError {
    /// A mesh file could not be opened or read.
    #[error("Failed to load mesh from {}: {source}", path.display())]
    MeshLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// An index points past the end of the array it addresses.
    #[error("{kind} index {index} is out of range (length: {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, PliantError>`.
pub type PliantResult<T> = Result<T, PliantError>;
