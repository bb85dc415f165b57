//! Absolute download and preview links.
//!
//! Plain string construction, no network. The credential travels as a query
//! parameter because browsers cannot attach headers to `<video>` or
//! `<a download>` requests.

use common::RedactedToken;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode exactly like ECMAScript `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// `{base}/download/{file_path}?token={token}`. An absent token encodes as empty.
pub fn download_url(base_url: &str, file_path: &str, token: Option<&RedactedToken>) -> String {
    format!(
        "{base_url}/download/{}?token={}",
        encode_uri_component(file_path),
        encode_token(token)
    )
}

/// `{base}/getFile?filename={filename}&token={token}`.
pub fn preview_url(base_url: &str, filename: &str, token: Option<&RedactedToken>) -> String {
    format!(
        "{base_url}/getFile?filename={}&token={}",
        encode_uri_component(filename),
        encode_token(token)
    )
}

fn encode_token(token: Option<&RedactedToken>) -> String {
    token
        .map(|t| encode_uri_component(t.expose()))
        .unwrap_or_default()
}
