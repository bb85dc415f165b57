//! Credential Store: the single mutable cell holding the session token.
//!
//! The store is injected into the transport pipeline and the route guard as
//! `Arc<dyn CredentialStore>` so both can run against a fake in tests.
//!
//! # Contract
//! - `get()` returns the current token or `None` ("unauthenticated")
//! - `set()` replaces any previous token
//! - `clear()` is idempotent; clearing an absent token does nothing
//! - none of the three report errors

mod file;
mod memory;

pub use file::{FileCredentialStore, STORAGE_FILE_NAME, TOKEN_KEY};
pub use memory::MemoryCredentialStore;

use common::RedactedToken;

pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<RedactedToken>;

    fn set(&self, token: RedactedToken);

    fn clear(&self);

    /// A present but empty token counts as unauthenticated.
    fn is_authenticated(&self) -> bool {
        self.get().is_some_and(|token| !token.is_empty())
    }
}
