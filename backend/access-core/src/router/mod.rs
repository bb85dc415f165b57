//! Route Guard and navigation seam.
//!
//! The guard only decides; acting on a [`NavigationDecision`] is the job of
//! whatever owns navigation (a [`Navigator`]).

mod guard;
mod navigator;
mod routes;

pub use guard::{NavigationDecision, REDIRECT_QUERY_KEY, RouteGuard, resume_target};
pub use navigator::{NavigationState, Navigator};
pub use routes::{DEFAULT_ROUTES, RouteDescriptor, RouteTable};

/// The path portion of a route: everything before `?` or `#`.
pub fn route_path(full_path: &str) -> &str {
    let end = full_path
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(full_path.len());
    &full_path[..end]
}
