use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures persisting the credential to disk.
///
/// Reads of the store never surface these; only opening the backing file and
/// the explicit `try_*` writers do.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Parse Error: {path}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Storage Write Error: {path}: {source} {location}")]
    Write {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Directory Error: {message} {location}")]
    Directory {
        message: String,
        location: ErrorLocation,
    },
}
