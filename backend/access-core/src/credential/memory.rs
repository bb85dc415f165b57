use super::CredentialStore;

use common::RedactedToken;

use std::sync::RwLock;

/// In-process credential cell. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<RedactedToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(RedactedToken::new(token))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<RedactedToken> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, token: RedactedToken) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    fn clear(&self) {
        self.token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
    }
}
