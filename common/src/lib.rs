//! Shared leaf types for the console access layer.
//!
//! Nothing in here talks to the network or touches disk. These are the
//! small value types every other crate in the workspace leans on:
//!
//! - [`ErrorLocation`] for `#[track_caller]` error provenance
//! - [`HttpStatusCode`] for transport status classification
//! - [`RedactedToken`] for carrying the bearer credential without leaking it

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
