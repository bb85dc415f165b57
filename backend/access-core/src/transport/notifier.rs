//! User-facing notification seam.

use log::error;

/// Surfaces a failure message to the user. Called exactly once per rejected call.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes notifications to the log at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        error!("{message}");
    }
}
