// Fakes for the pipeline seams: transport, notifier, navigator.

use crate::error::ApiError;
use crate::router::{NavigationState, Navigator};
use crate::transport::{Notifier, PreparedRequest, RawResponse, Transport};

use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays canned outcomes and records what it was sent.
#[derive(Default)]
pub struct FakeTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::no_response("no canned response left")))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Navigator that also counts navigations.
pub struct CountingNavigator {
    state: NavigationState,
    navigations: Mutex<Vec<String>>,
}

impl CountingNavigator {
    pub fn at(route: &str) -> Self {
        Self {
            state: NavigationState::new(route),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Navigator for CountingNavigator {
    fn current_route(&self) -> String {
        self.state.current_route()
    }

    fn navigate(&self, to: &str) {
        self.navigations.lock().unwrap().push(to.to_string());
        self.state.navigate(to);
    }
}
