//! Outgoing stage: Request Descriptor + current credential → wire request.
//!
//! Pure. Does no I/O and never consults anything but its arguments.

use super::request::{ContentKind, HttpMethod, Payload, ProgressSink, RequestDescriptor, UploadForm};
use crate::error::ApiError;

use common::RedactedToken;

use serde_json::Value;
use url::Url;

#[derive(Debug, Clone)]
pub enum PreparedBody {
    Empty,
    Json(Value),
    Multipart {
        form: UploadForm,
        progress: Option<ProgressSink>,
    },
}

/// A fully resolved request, ready for a [`super::Transport`].
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub content_kind: ContentKind,
    pub authorization: Option<RedactedToken>,
    pub body: PreparedBody,
}

impl PreparedRequest {
    /// `Authorization` header value, if a credential was attached.
    pub fn authorization_header(&self) -> Option<String> {
        self.authorization
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose()))
    }

    pub fn content_type(&self) -> &'static str {
        self.content_kind.mime()
    }
}

/// Resolve `descriptor` against `base_url` and attach `credential` as a
/// bearer token when present.
///
/// The path is appended to the base verbatim, so a base with a path prefix
/// (`http://host/api`) keeps it.
///
/// # Errors
///
/// Returns [`ApiError::Request`] if the joined URL does not parse.
pub fn prepare(
    base_url: &Url,
    descriptor: RequestDescriptor,
    credential: Option<RedactedToken>,
) -> Result<PreparedRequest, ApiError> {
    let content_kind = descriptor.content_kind();
    let (method, path, payload) = descriptor.into_parts();

    let mut url = join_path(base_url, &path)?;

    let body = match payload {
        Payload::None => PreparedBody::Empty,
        Payload::Query(pairs) => {
            if !pairs.is_empty() {
                let mut query = url.query_pairs_mut();
                for (key, value) in &pairs {
                    query.append_pair(key, value);
                }
            }
            PreparedBody::Empty
        }
        Payload::Json(value) => PreparedBody::Json(value),
        Payload::Multipart { form, progress } => PreparedBody::Multipart { form, progress },
    };

    Ok(PreparedRequest {
        method,
        url,
        content_kind,
        authorization: credential.filter(|token| !token.is_empty()),
        body,
    })
}

fn join_path(base_url: &Url, path: &str) -> Result<Url, ApiError> {
    let base = base_url.as_str().trim_end_matches('/');
    let joined = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    Url::parse(&joined).map_err(|e| ApiError::request(format!("{joined}: {e}")))
}
