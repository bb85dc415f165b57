//! Incoming stage: raw transport outcome → payload or classified failure.
//!
//! Evaluated in order:
//! 1. no response at all → [`ApiError::NoResponse`]
//! 2. non-2xx status → 401/403/404/500 variants, else [`ApiError::HttpStatus`]
//! 3. 2xx → the envelope's `code` must be exactly 200, otherwise
//!    [`ApiError::Business`] with the envelope's message
//!
//! Pure: the side effects of a failure live in the pipeline.

use crate::error::ApiError;
use crate::error::api::BUSINESS_FALLBACK_MESSAGE;

use common::HttpStatusCode;

use serde_json::{Number, Value};

/// Business status that denotes success.
pub const SUCCESS_CODE: i64 = 200;

/// An HTTP response as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// `{ code, msg?, message?, data? }`, read leniently.
///
/// A body that is not a JSON object yields an envelope with every field
/// absent, which classifies as a business failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    pub code: Option<Number>,
    pub msg: Option<String>,
    pub message: Option<String>,
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn parse(body: &str) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };

        let text = |value: Option<Value>| match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        Self {
            code: match fields.remove("code") {
                Some(Value::Number(n)) => Some(n),
                _ => None,
            },
            msg: text(fields.remove("msg")),
            message: text(fields.remove("message")),
            data: fields.remove("data").unwrap_or(Value::Null),
        }
    }

    /// Numeric equality with 200; `"200"` as a string does not count.
    pub fn is_success(&self) -> bool {
        self.code
            .as_ref()
            .and_then(Number::as_f64)
            .is_some_and(|code| code == SUCCESS_CODE as f64)
    }

    /// First non-empty of `msg`, `message`.
    pub fn error_text(&self) -> Option<&str> {
        [self.msg.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
    }

    pub fn into_payload(self) -> Result<Value, ApiError> {
        if self.is_success() {
            return Ok(self.data);
        }

        let message = self
            .error_text()
            .unwrap_or(BUSINESS_FALLBACK_MESSAGE)
            .to_string();
        Err(ApiError::business(
            message,
            self.code.as_ref().and_then(Number::as_i64),
        ))
    }
}

/// Classify a transport outcome. See the module docs for the order.
pub fn classify(outcome: Result<RawResponse, ApiError>) -> Result<Value, ApiError> {
    let response = outcome?;
    let status = HttpStatusCode(response.status);

    if !status.is_success() {
        let detail = ResponseEnvelope::parse(&response.body)
            .error_text()
            .map(str::to_string)
            .unwrap_or_default();
        return Err(ApiError::from_http_status(status, detail));
    }

    ResponseEnvelope::parse(&response.body).into_payload()
}
