use std::path::PathBuf;
use thiserror::Error;

/// Errors from the state store. Read problems on an existing file degrade
/// to defaults inside the store; these are the failures that surface.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create state directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize counter state")]
    Serialize(#[from] serde_json::Error),

    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}
