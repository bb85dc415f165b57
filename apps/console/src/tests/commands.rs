use crate::cli::Command;
use crate::commands::Context;

use access_core::ConsoleClient;
use access_core::config::ClientConfig;
use access_core::credential::{CredentialStore, MemoryCredentialStore};
use access_core::router::{NavigationState, RouteGuard, RouteTable};
use access_core::transport::LogNotifier;

use std::sync::Arc;

fn context(token: Option<&str>, route: &str) -> Context {
    let credentials: Arc<dyn CredentialStore> = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let navigator = Arc::new(NavigationState::new(route));
    let client = ConsoleClient::from_config(
        &ClientConfig::default(),
        credentials.clone(),
        Arc::new(LogNotifier),
        navigator.clone(),
    )
    .unwrap();

    Context::new(client, RouteGuard::new(RouteTable::default(), credentials), navigator)
}

/// **VALUE**: Verifies a guarded navigation lands where the guard sent it.
///
/// **BUG THIS CATCHES**: Would catch a redirect decision that is printed but
/// never applied, leaving the session on its previous route.
#[tokio::test]
async fn given_no_credential_when_protected_route_requested_then_session_moves_to_login() {
    // GIVEN
    let context = context(None, "/");

    // WHEN
    context
        .run(Command::Route {
            path: "/publish-center?status=failed".to_string(),
        })
        .await
        .unwrap();

    // THEN
    assert_eq!(
        context.current_route(),
        "/login?redirect=%2Fpublish-center%3Fstatus%3Dfailed"
    );
}

#[tokio::test]
async fn given_credential_when_protected_route_requested_then_session_moves_there() {
    let context = context(Some("t"), "/");

    context
        .run(Command::Route {
            path: "/data".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(context.current_route(), "/data");
}
