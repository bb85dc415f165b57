//! Environment inputs: `.env` loading and the base URL override.

use crate::API_BASE_URL_ENV;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Result of attempting to load a `.env` file.
///
/// Loading happens before logging is set up, so nothing is logged here;
/// the host calls [`EnvLoadResult::log`] once its logger is running.
#[derive(Debug, Default)]
pub struct EnvLoadResult {
    pub path: Option<PathBuf>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl EnvLoadResult {
    fn loaded(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            loaded: true,
            error: None,
        }
    }

    fn failed(path: Option<PathBuf>, error: dotenvy::Error) -> Self {
        Self {
            path,
            loaded: false,
            error: Some(error.to_string()),
        }
    }

    pub fn log(&self) {
        match (&self.path, &self.error) {
            (Some(path), Some(e)) => warn!("Failed to parse .env at {}: {e}", path.display()),
            (None, Some(e)) => warn!("Failed to parse .env: {e}"),
            (Some(path), None) => info!("Loaded .env from: {}", path.display()),
            (None, None) => debug!("No .env file found"),
        }
    }
}

/// Load `.env` from the current directory (or a parent), then from the
/// executable's directory. Missing files are not an error.
pub fn try_load_dotenv() -> EnvLoadResult {
    match dotenvy::dotenv() {
        Ok(path) => return EnvLoadResult::loaded(path),
        Err(e) if !e.not_found() => return EnvLoadResult::failed(None, e),
        Err(_) => {}
    }

    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        .filter(|path| path.exists());

    match beside_exe {
        Some(path) => match dotenvy::from_path(&path) {
            Ok(()) => EnvLoadResult::loaded(path),
            Err(e) => EnvLoadResult::failed(Some(path), e),
        },
        None => EnvLoadResult::default(),
    }
}

/// Trimmed, non-empty value of `CONSOLE_API_BASE_URL`.
pub fn base_url_override() -> Option<String> {
    match env::var(API_BASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => None,
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{API_BASE_URL_ENV} contains invalid unicode, ignoring");
            None
        }
    }
}
