use access_core::credential::MemoryCredentialStore;
use access_core::router::{NavigationState, Navigator};
use access_core::transport::{Notifier, Pipeline, ReqwestTransport};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use url::Url;

#[derive(Default)]
pub struct CollectingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct Fixture {
    pub credentials: Arc<MemoryCredentialStore>,
    pub notifier: Arc<CollectingNotifier>,
    pub navigator: Arc<NavigationState>,
}

impl Fixture {
    pub fn new(token: Option<&str>, route: &str) -> Self {
        Self {
            credentials: Arc::new(match token {
                Some(token) => MemoryCredentialStore::with_token(token),
                None => MemoryCredentialStore::new(),
            }),
            notifier: Arc::new(CollectingNotifier::default()),
            navigator: Arc::new(NavigationState::new(route)),
        }
    }

    pub fn pipeline(&self, base_url: &str) -> Pipeline<ReqwestTransport> {
        let transport =
            ReqwestTransport::new(Duration::from_secs(5), Duration::from_secs(2)).unwrap();
        Pipeline::new(
            transport,
            Url::parse(base_url).unwrap(),
            self.credentials.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }

    pub fn current_route(&self) -> String {
        self.navigator.current_route()
    }
}
