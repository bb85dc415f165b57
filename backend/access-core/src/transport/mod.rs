//! Transport Pipeline: the single chokepoint for network calls.
//!
//! # Stages
//!
//! ```text
//! RequestDescriptor ─ prepare() ─► PreparedRequest ─ Transport ─► RawResponse ─ classify() ─► Value
//!                      (+ bearer)                                               (envelope check)
//! ```
//!
//! [`prepare`] and [`classify`] are pure functions, testable without a network.
//! [`Pipeline`] composes them around a [`Transport`] and owns the failure side
//! effects: notify once, and on 401 clear the credential and send the user to
//! the login route.

pub mod classify;
mod http;
mod notifier;
mod pipeline;
pub mod prepare;
pub mod request;

pub use classify::{RawResponse, ResponseEnvelope, classify};
pub use http::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, ReqwestTransport, UPLOAD_CHUNK_SIZE};
pub use notifier::{LogNotifier, Notifier};
pub use pipeline::Pipeline;
pub use prepare::{PreparedBody, PreparedRequest, prepare};
pub use request::{
    ContentKind, FormPart, HttpMethod, Payload, ProgressSink, RequestDescriptor, UploadForm,
    UploadProgress,
};

use crate::error::ApiError;

use std::future::Future;

/// The underlying HTTP exchange.
///
/// Implementations return `Ok` for any received response, whatever its
/// status, and [`ApiError::NoResponse`] when nothing came back.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send;
}
