//! Classified failures of the transport pipeline.
//!
//! Key design decisions:
//! - Transport status and business status are separate axes; an HTTP 200 can
//!   still produce [`ApiError::Business`]
//! - Every variant carries the text shown to the user via [`ApiError::user_message`]
//! - All errors include ErrorLocation, captured with `#[track_caller]`

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

pub const NO_RESPONSE_MESSAGE: &str = "Network connection failed";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized, please log in again";
pub const FORBIDDEN_MESSAGE: &str = "Access denied";
pub const NOT_FOUND_MESSAGE: &str = "Requested resource does not exist";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const BUSINESS_FALLBACK_MESSAGE: &str = "Request failed";
pub const DECODE_MESSAGE: &str = "Unexpected response format";
pub const REQUEST_MESSAGE: &str = "Invalid request";

#[derive(Debug, ThisError)]
pub enum ApiError {
    /// The transport failed before any HTTP response arrived.
    #[error("No Response Error: {message} {location}")]
    NoResponse {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Unauthorized Error: HTTP 401 {detail} {location}")]
    Unauthorized {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Forbidden Error: HTTP 403 {detail} {location}")]
    Forbidden {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Not Found Error: HTTP 404 {detail} {location}")]
    NotFound {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP 500 {detail} {location}")]
    ServerError {
        detail: String,
        location: ErrorLocation,
    },

    /// Any other non-2xx transport status.
    #[error("HTTP Status Error: HTTP {status_code} {detail} {location}")]
    HttpStatus {
        status_code: HttpStatusCode,
        detail: String,
        location: ErrorLocation,
    },

    /// The envelope arrived but its business `code` was not 200.
    #[error("Business Error: {message} {location}")]
    Business {
        message: String,
        code: Option<i64>,
        location: ErrorLocation,
    },

    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Categorise a reqwest failure that produced no response.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        ApiError::NoResponse {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a non-2xx transport status onto the taxonomy.
    #[track_caller]
    pub fn from_http_status(status_code: HttpStatusCode, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let location = ErrorLocation::from(Location::caller());

        match status_code {
            HttpStatusCode::UNAUTHORIZED => ApiError::Unauthorized { detail, location },
            HttpStatusCode::FORBIDDEN => ApiError::Forbidden { detail, location },
            HttpStatusCode::NOT_FOUND => ApiError::NotFound { detail, location },
            HttpStatusCode::INTERNAL_SERVER_ERROR => ApiError::ServerError { detail, location },
            status_code => ApiError::HttpStatus {
                status_code,
                detail,
                location,
            },
        }
    }

    #[track_caller]
    pub fn no_response(message: impl Into<String>) -> Self {
        ApiError::NoResponse {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn business(message: impl Into<String>, code: Option<i64>) -> Self {
        ApiError::Business {
            message: message.into(),
            code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn request(message: impl Into<String>) -> Self {
        ApiError::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text handed to the notifier for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::NoResponse { .. } => NO_RESPONSE_MESSAGE,
            ApiError::Unauthorized { .. } => UNAUTHORIZED_MESSAGE,
            ApiError::Forbidden { .. } => FORBIDDEN_MESSAGE,
            ApiError::NotFound { .. } => NOT_FOUND_MESSAGE,
            ApiError::ServerError { .. } => SERVER_ERROR_MESSAGE,
            ApiError::HttpStatus { .. } => NETWORK_ERROR_MESSAGE,
            ApiError::Business { message, .. } => message,
            ApiError::Request { .. } => REQUEST_MESSAGE,
            ApiError::Decode { .. } => DECODE_MESSAGE,
        }
    }

    /// Stable category name for log lines.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::NoResponse { is_timeout: true, .. } => "timeout",
            ApiError::NoResponse { is_connection: true, .. } => "connection",
            ApiError::NoResponse { .. } => "no_response",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Forbidden { .. } => "forbidden",
            ApiError::NotFound { .. } => "not_found",
            ApiError::ServerError { .. } => "server_error",
            ApiError::HttpStatus { .. } => "http_status",
            ApiError::Business { .. } => "business",
            ApiError::Request { .. } => "request",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// Transport status code, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::ServerError { .. } => Some(500),
            ApiError::HttpStatus { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    /// Whether this failure invalidates the whole session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
