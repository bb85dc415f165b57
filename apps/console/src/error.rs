use access_core::error::{ApiError, ConfigError, CoreError, StorageError};

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the console binary.
///
/// Library errors are flattened to their message here; the original carries
/// its own location, this one records where the console gave up.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Error from this app
    #[error("Console Error: {message} {location}")]
    Console {
        message: String,
        location: ErrorLocation,
    },

    /// Error from access-core (config, storage, transport)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A request was rejected; the user was already notified
    #[error("Request Rejected: {message} {location}")]
    Rejected {
        message: String,
        category: &'static str,
        location: ErrorLocation,
    },
}

impl ConsoleError {
    #[track_caller]
    pub fn console(message: impl Into<String>) -> Self {
        ConsoleError::Console {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsoleError::Console { .. } => 2,
            ConsoleError::Core { .. } => 3,
            ConsoleError::Rejected {
                category: "unauthorized",
                ..
            } => 4,
            ConsoleError::Rejected { .. } => 1,
        }
    }
}

impl From<ApiError> for ConsoleError {
    #[track_caller]
    fn from(error: ApiError) -> Self {
        ConsoleError::Rejected {
            message: error.user_message().to_string(),
            category: error.category(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ConsoleError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Api(api) => ConsoleError::from(api),
            other => ConsoleError::Core {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<ConfigError> for ConsoleError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ConsoleError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for ConsoleError {
    #[track_caller]
    fn from(error: StorageError) -> Self {
        ConsoleError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
