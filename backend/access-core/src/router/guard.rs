use super::{RouteTable, route_path};
use crate::LOGIN_ROUTE;
use crate::credential::CredentialStore;
use crate::links::encode_uri_component;

use std::sync::Arc;

use log::debug;

/// Query key carrying the return target on the login route.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allowed,
    Redirected {
        /// Route substituted for the requested one.
        to: String,
        /// Full originally requested path, query included.
        return_target: String,
    },
}

impl NavigationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, NavigationDecision::Allowed)
    }

    /// Concrete destination for `requested` under this decision.
    pub fn location(&self, requested: &str) -> String {
        match self {
            NavigationDecision::Allowed => requested.to_string(),
            NavigationDecision::Redirected { to, return_target } => format!(
                "{to}?{REDIRECT_QUERY_KEY}={}",
                encode_uri_component(return_target)
            ),
        }
    }
}

/// Evaluates each navigation against authentication state.
///
/// Synchronous and read-only: it consults the credential store and never
/// mutates it.
#[derive(Clone)]
pub struct RouteGuard {
    routes: RouteTable,
    credentials: Arc<dyn CredentialStore>,
}

impl RouteGuard {
    pub fn new(routes: RouteTable, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            routes,
            credentials,
        }
    }

    pub fn evaluate(&self, requested: &str) -> NavigationDecision {
        let path = route_path(requested);

        if self.routes.is_public(path) {
            return NavigationDecision::Allowed;
        }

        if self.credentials.is_authenticated() {
            return NavigationDecision::Allowed;
        }

        debug!("No credential for {path}, redirecting to {LOGIN_ROUTE}");
        NavigationDecision::Redirected {
            to: LOGIN_ROUTE.to_string(),
            return_target: requested.to_string(),
        }
    }
}

/// Where to go after a successful login.
///
/// Only in-app absolute paths are honoured; anything else (missing, relative,
/// protocol-relative `//host`, absolute URLs) falls back to `/`.
pub fn resume_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(target) if target.starts_with('/') && !target.starts_with("//") => target.to_string(),
        _ => String::from("/"),
    }
}
