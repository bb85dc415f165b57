use std::sync::RwLock;

use log::debug;

/// Owner of the current route.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;

    fn navigate(&self, to: &str);
}

/// In-memory navigator that records the current route.
#[derive(Debug)]
pub struct NavigationState {
    current: RwLock<String>,
}

impl NavigationState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(initial.into()),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for NavigationState {
    fn current_route(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn navigate(&self, to: &str) {
        debug!("Navigating to {to}");
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = to.to_string();
    }
}
