//! Request Descriptor: what a resource client hands the pipeline.
//!
//! Immutable once built. Carries no credential; the outgoing stage adds that.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Declared body encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Multipart,
}

impl ContentKind {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentKind::Json => "application/json",
            ContentKind::Multipart => "multipart/form-data",
        }
    }
}

/// Bytes of an upload consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Completion in percent, 100 for an empty upload.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.loaded.min(self.total) * 100) / self.total) as u8
    }
}

/// Caller-supplied callback receiving upload progress.
#[derive(Clone)]
pub struct ProgressSink(Arc<dyn Fn(UploadProgress) + Send + Sync>);

impl ProgressSink {
    pub fn new(sink: impl Fn(UploadProgress) + Send + Sync + 'static) -> Self {
        Self(Arc::new(sink))
    }

    pub fn report(&self, progress: UploadProgress) {
        (self.0)(progress)
    }
}

impl fmt::Debug for ProgressSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressSink")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

/// A multipart form described as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    parts: Vec<FormPart>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime,
            bytes,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Total size of all file parts.
    pub fn file_bytes(&self) -> u64 {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::File { bytes, .. } => bytes.len() as u64,
                FormPart::Text { .. } => 0,
            })
            .sum()
    }
}

#[derive(Debug, Clone)]
pub enum Payload {
    None,
    /// Query string pairs, in order.
    Query(Vec<(String, String)>),
    Json(Value),
    Multipart {
        form: UploadForm,
        progress: Option<ProgressSink>,
    },
}

#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: HttpMethod,
    path: String,
    payload: Payload,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>, payload: Payload) -> Self {
        Self {
            method,
            path: path.into(),
            payload,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path, Payload::None)
    }

    pub fn get_with_query(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self::new(HttpMethod::Get, path, Payload::Query(query))
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(
            HttpMethod::Post,
            path,
            body.map_or(Payload::None, Payload::Json),
        )
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        Self::new(
            HttpMethod::Put,
            path,
            body.map_or(Payload::None, Payload::Json),
        )
    }

    pub fn delete(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self::new(HttpMethod::Delete, path, Payload::Query(query))
    }

    pub fn upload(
        path: impl Into<String>,
        form: UploadForm,
        progress: Option<ProgressSink>,
    ) -> Self {
        Self::new(HttpMethod::Post, path, Payload::Multipart { form, progress })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content_kind(&self) -> ContentKind {
        match self.payload {
            Payload::Multipart { .. } => ContentKind::Multipart,
            _ => ContentKind::Json,
        }
    }

    pub(crate) fn into_parts(self) -> (HttpMethod, String, Payload) {
        (self.method, self.path, self.payload)
    }
}
