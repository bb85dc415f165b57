//! The session bearer token, kept out of logs and off the serializer.
//!
//! The only way to read the value is [`RedactedToken::expose`]. The credential
//! store persists it that way, and the transport attaches it to the
//! `Authorization` header that way. The buffer is wiped when the last copy drops.

use crate::RedactError;

use std::fmt;

use serde::{Serialize, Serializer, ser::Error as _};
use zeroize::Zeroizing;

#[derive(Clone, PartialEq, Eq)]
pub struct RedactedToken(Zeroizing<String>);

impl RedactedToken {
    pub fn new(token: impl Into<String>) -> Self {
        RedactedToken(Zeroizing::new(token.into()))
    }

    /// Raw value for the wire or the storage file.
    #[inline]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Byte length, safe to log.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RedactedToken")
            .field(&format_args!("<{} bytes>", self.len()))
            .finish()
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<session token>")
    }
}

impl Serialize for RedactedToken {
    #[track_caller]
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom(RedactError::token_serialization()))
    }
}
