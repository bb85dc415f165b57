//! Durable key→string storage backing the credential.
//!
//! The file is a flat JSON object (`{"token": "..."}`) so other client
//! settings can share it later. Writes go through a temp file + rename.

use super::CredentialStore;
use crate::error::StorageError;

use common::{ErrorLocation, RedactedToken};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, info, warn};

pub const STORAGE_FILE_NAME: &str = "storage.json";
pub const TOKEN_KEY: &str = "token";

/// Credential store that survives process restarts.
///
/// Reads are served from memory; every mutation is written through to
/// `{dir}/storage.json`. A failed write is logged and leaves the in-memory
/// value in place, so the running session keeps working.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileCredentialStore {
    /// Open (or lazily create) the storage file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read or is
    /// not a JSON object of strings. A missing file is not an error.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        let path = dir.join(STORAGE_FILE_NAME);

        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| StorageError::Read {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                source: e,
            })?;

            serde_json::from_str::<BTreeMap<String, String>>(&contents).map_err(|e| {
                StorageError::Parse {
                    location: ErrorLocation::from(Location::caller()),
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?
        } else {
            debug!("No storage file at {}, starting logged out", path.display());
            BTreeMap::new()
        };

        if entries.contains_key(TOKEN_KEY) {
            info!("Restored persisted credential from {}", path.display());
        }

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like [`CredentialStore::set`], but reports a failed write.
    pub fn try_set(&self, token: RedactedToken) -> Result<(), StorageError> {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            entries.insert(TOKEN_KEY.to_string(), token.expose().to_string());
            entries.clone()
        };

        self.persist(&snapshot)
    }

    /// Like [`CredentialStore::clear`], but reports a failed write.
    pub fn try_clear(&self) -> Result<(), StorageError> {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if entries.remove(TOKEN_KEY).is_none() {
                return Ok(());
            }
            entries.clone()
        };

        self.persist(&snapshot)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = self.path.parent().ok_or_else(|| StorageError::Directory {
            message: format!("{} has no parent directory", self.path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::create_dir_all(dir).map_err(|e| StorageError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: dir.to_path_buf(),
            source: e,
        })?;

        let temp_path = dir.join(format!("{STORAGE_FILE_NAME}.tmp"));

        // BTreeMap<String, String> always serializes
        let json = serde_json::to_string_pretty(entries).unwrap_or_else(|_| String::from("{}"));

        std::fs::write(&temp_path, json).map_err(|e| StorageError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| StorageError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<RedactedToken> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(TOKEN_KEY)
            .map(RedactedToken::new)
    }

    fn set(&self, token: RedactedToken) {
        let len = token.len();
        match self.try_set(token) {
            Ok(()) => info!("Credential stored ({len} chars)"),
            Err(e) => warn!("Credential kept in memory only: {e}"),
        }
    }

    fn clear(&self) {
        match self.try_clear() {
            Ok(()) => info!("Credential cleared"),
            Err(e) => warn!("Credential cleared in memory only: {e}"),
        }
    }
}
