//! Production [`Transport`] over reqwest.

use super::Transport;
use super::classify::RawResponse;
use super::prepare::{PreparedBody, PreparedRequest};
use super::request::{FormPart, ProgressSink, UploadForm, UploadProgress};
use crate::error::ApiError;

use std::time::Duration;

use bytes::Bytes;
use log::debug;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upload bodies are streamed in chunks of this size so progress can be reported.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request and connect timeouts.
    ///
    /// Timeouts are the only timeout mechanism in the access layer.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let PreparedRequest {
            method,
            url,
            content_kind,
            authorization,
            body,
        } = request;

        debug!("{method} {}", url.path());

        let mut builder = self.client.request(method.into(), url);

        if let Some(token) = &authorization {
            builder = builder.bearer_auth(token.expose());
        }

        builder = match body {
            PreparedBody::Empty => builder.header(CONTENT_TYPE, content_kind.mime()),
            PreparedBody::Json(value) => builder.json(&value),
            // The form sets its own Content-Type with the boundary
            PreparedBody::Multipart { form, progress } => {
                builder.multipart(build_form(form, progress)?)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        let status = response.status().as_u16();
        // Headers arrived but the body can still be cut short or time out
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        Ok(RawResponse { status, body })
    }
}

fn build_form(form: UploadForm, progress: Option<ProgressSink>) -> Result<Form, ApiError> {
    let total = form.file_bytes();
    let mut tracker = progress.map(|sink| ProgressTracker::new(sink, total));
    let mut multipart = Form::new();

    if let Some(tracker) = &tracker {
        if total == 0 {
            tracker.sink.report(UploadProgress { loaded: 0, total: 0 });
        }
    }

    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let part = match tracker.as_mut() {
                    Some(tracker) => tracker.streaming_part(bytes),
                    None => Part::bytes(bytes),
                }
                .file_name(file_name);

                let part = match mime {
                    Some(mime) => part
                        .mime_str(&mime)
                        .map_err(|e| ApiError::request(format!("Invalid MIME type {mime}: {e}")))?,
                    None => part,
                };

                multipart.part(name, part)
            }
        };
    }

    Ok(multipart)
}

/// Reports cumulative bytes across every file part of one form.
struct ProgressTracker {
    sink: ProgressSink,
    total: u64,
    offset: u64,
}

impl ProgressTracker {
    fn new(sink: ProgressSink, total: u64) -> Self {
        Self {
            sink,
            total,
            offset: 0,
        }
    }

    fn streaming_part(&mut self, bytes: Vec<u8>) -> Part {
        let length = bytes.len() as u64;
        let data = Bytes::from(bytes);
        let chunks: Vec<Bytes> = (0..data.len())
            .step_by(UPLOAD_CHUNK_SIZE)
            .map(|start| data.slice(start..(start + UPLOAD_CHUNK_SIZE).min(data.len())))
            .collect();

        let sink = self.sink.clone();
        let total = self.total;
        let mut loaded = self.offset;
        self.offset += length;

        let stream = futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
            loaded += chunk.len() as u64;
            sink.report(UploadProgress { loaded, total });
            Ok::<Bytes, std::io::Error>(chunk)
        }));

        Part::stream_with_length(reqwest::Body::wrap_stream(stream), length)
    }
}
