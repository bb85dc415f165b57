use super::classify::classify;
use super::prepare::prepare;
use super::request::{ProgressSink, RequestDescriptor, UploadForm};
use super::{Notifier, Transport};
use crate::LOGIN_ROUTE;
use crate::credential::CredentialStore;
use crate::error::ApiError;
use crate::router::{Navigator, route_path};

use std::sync::Arc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Request/response pipeline wrapping a [`Transport`].
///
/// Every call either resolves with the envelope's `data` or rejects with a
/// classified [`ApiError`]. Each rejection is reported to the [`Notifier`]
/// exactly once before it is returned.
pub struct Pipeline<T> {
    transport: T,
    base_url: Url,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(
        transport: T,
        base_url: Url,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            base_url,
            credentials,
            notifier,
            navigator,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Run `descriptor` through prepare → transport → classify.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let method = descriptor.method();
        let path = descriptor.path().to_string();

        let prepared = prepare(&self.base_url, descriptor, self.credentials.get())
            .map_err(|e| self.reject(e))?;

        debug!(
            "Sending {method} {path} ({}, {})",
            prepared.content_type(),
            if prepared.authorization.is_some() { "authenticated" } else { "anonymous" }
        );

        let outcome = self.transport.execute(prepared).await;

        match classify(outcome) {
            Ok(data) => {
                debug!("{method} {path} resolved");
                Ok(data)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// [`Pipeline::send`], then deserialize the payload into `R`.
    pub async fn send_as<R: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<R, ApiError> {
        let data = self.send(descriptor).await?;
        self.decode(data)
    }

    /// Deserialize an already-resolved payload, rejecting on mismatch.
    pub fn decode<R: DeserializeOwned>(&self, data: Value) -> Result<R, ApiError> {
        serde_json::from_value(data).map_err(|e| self.reject(ApiError::decode(e.to_string())))
    }

    pub async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::get_with_query(path, query)).await
    }

    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::post(path, body)).await
    }

    pub async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::put(path, body)).await
    }

    pub async fn delete(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::delete(path, query)).await
    }

    pub async fn upload(
        &self,
        path: &str,
        form: UploadForm,
        progress: Option<ProgressSink>,
    ) -> Result<Value, ApiError> {
        self.send(RequestDescriptor::upload(path, form, progress)).await
    }

    /// Failure side effects. Returns the error for propagation.
    pub(crate) fn reject(&self, error: ApiError) -> ApiError {
        warn!("Request rejected [{}]: {error}", error.category());
        self.notifier.notify(error.user_message());

        if error.is_unauthorized() {
            self.credentials.clear();

            let current = self.navigator.current_route();
            if route_path(&current) != LOGIN_ROUTE {
                info!("Session invalid, redirecting {current} -> {LOGIN_ROUTE}");
                self.navigator.navigate(LOGIN_ROUTE);
            }
        }

        error
    }
}
