use crate::credential::{CredentialStore, MemoryCredentialStore};
use crate::router::{
    NavigationDecision, NavigationState, Navigator, RouteGuard, RouteTable, resume_target,
    route_path,
};

use std::sync::Arc;

fn guard(store: Arc<MemoryCredentialStore>) -> RouteGuard {
    RouteGuard::new(RouteTable::default(), store)
}

#[test]
fn given_no_credential_when_login_requested_then_allowed() {
    let guard = guard(Arc::new(MemoryCredentialStore::new()));

    assert_eq!(guard.evaluate("/login"), NavigationDecision::Allowed);
    assert!(guard.evaluate("/login?redirect=%2Fdata").is_allowed());
}

/// **VALUE**: Verifies protected views bounce to login with a return target.
///
/// **BUG THIS CATCHES**: Would catch dropping the query string from the
/// return target, so the user lands on an unfiltered list after login.
#[test]
fn given_no_credential_when_protected_route_requested_then_redirected_with_full_path() {
    // GIVEN
    let guard = guard(Arc::new(MemoryCredentialStore::new()));

    // WHEN
    let decision = guard.evaluate("/publish-center?status=failed");

    // THEN
    assert_eq!(
        decision,
        NavigationDecision::Redirected {
            to: "/login".to_string(),
            return_target: "/publish-center?status=failed".to_string(),
        }
    );
    assert_eq!(
        decision.location("/publish-center?status=failed"),
        "/login?redirect=%2Fpublish-center%3Fstatus%3Dfailed"
    );
}

#[test]
fn given_credential_when_protected_route_requested_then_allowed() {
    let guard = guard(Arc::new(MemoryCredentialStore::with_token("t")));

    for path in ["/", "/account-management", "/material-management", "/data"] {
        assert!(guard.evaluate(path).is_allowed(), "{path}");
    }
}

#[test]
fn given_no_credential_when_unknown_route_requested_then_redirected() {
    let guard = guard(Arc::new(MemoryCredentialStore::new()));

    assert!(!guard.evaluate("/not-a-route").is_allowed());
}

#[test]
fn given_allowed_decision_when_location_asked_then_requested_path_returned() {
    assert_eq!(NavigationDecision::Allowed.location("/data"), "/data");
}

/// **BUG THIS CATCHES**: Would catch a guard that clears or rewrites the
/// credential while evaluating.
#[test]
fn given_credential_when_guard_evaluates_then_store_unchanged() {
    let store = Arc::new(MemoryCredentialStore::with_token("keep-me"));
    let guard = guard(store.clone());

    guard.evaluate("/login");
    guard.evaluate("/data");

    assert_eq!(store.get().unwrap().expose(), "keep-me");
}

#[test]
fn given_guard_when_credential_cleared_later_then_next_evaluation_redirects() {
    let store = Arc::new(MemoryCredentialStore::with_token("t"));
    let guard = guard(store.clone());
    assert!(guard.evaluate("/data").is_allowed());

    store.clear();

    assert!(!guard.evaluate("/data").is_allowed());
}

#[test]
fn given_redirect_targets_when_resumed_then_only_in_app_paths_honoured() {
    assert_eq!(resume_target(Some("/data?range=7")), "/data?range=7");
    assert_eq!(resume_target(Some("//evil.example.com")), "/");
    assert_eq!(resume_target(Some("https://evil.example.com")), "/");
    assert_eq!(resume_target(Some("")), "/");
    assert_eq!(resume_target(None), "/");
}

#[test]
fn given_full_paths_when_route_path_taken_then_query_and_fragment_stripped() {
    assert_eq!(route_path("/login?redirect=%2F"), "/login");
    assert_eq!(route_path("/data#top"), "/data");
    assert_eq!(route_path("/"), "/");
}

#[test]
fn given_navigation_state_when_navigated_then_current_route_updates() {
    let state = NavigationState::default();
    assert_eq!(state.current_route(), "/");

    state.navigate("/login");

    assert_eq!(state.current_route(), "/login");
}
