use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Raised when a session token reaches a serializer.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Redact Error: session token cannot be serialized, persist expose() instead {location}")]
    TokenSerialization { location: ErrorLocation },
}

impl RedactError {
    #[track_caller]
    pub fn token_serialization() -> Self {
        RedactError::TokenSerialization {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
