use super::paths;
use super::types::{RegisterRequest, RegisterResponse, Session, UserInfo};
use crate::cache::TtlCache;
use crate::error::ApiError;
use crate::transport::{Pipeline, RequestDescriptor, Transport};

use common::RedactedToken;

use log::info;
use serde::Deserialize;
use serde_json::{Value, json};

/// `data` of a successful `/auth/login`.
#[derive(Deserialize)]
struct LoginPayload {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    user: UserInfo,
}

pub struct AuthApi<'a, T> {
    pipeline: &'a Pipeline<T>,
    cache: &'a TtlCache<Value>,
}

impl<'a, T: Transport> AuthApi<'a, T> {
    pub(crate) fn new(pipeline: &'a Pipeline<T>, cache: &'a TtlCache<Value>) -> Self {
        Self { pipeline, cache }
    }

    /// `POST /auth/login`. Stores the issued token on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let body = json!({ "username": username, "password": password });
        let payload: LoginPayload = self
            .pipeline
            .send_as(RequestDescriptor::post(paths::LOGIN, Some(body)))
            .await?;

        let token = RedactedToken::new(payload.access_token);
        if token.is_empty() {
            return Err(self
                .pipeline
                .reject(ApiError::decode("login response carried an empty access_token")));
        }

        self.start_session(token);
        info!("Logged in as {}", payload.user.username);

        Ok(Session {
            expires_in: payload.expires_in,
            user: payload.user,
        })
    }

    /// `POST /auth/register`. Stores a token only if the server issued one.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let body = serde_json::to_value(request)
            .map_err(|e| self.pipeline.reject(ApiError::request(e.to_string())))?;
        let data = self
            .pipeline
            .send(RequestDescriptor::post(paths::REGISTER, Some(body)))
            .await?;

        if let Some(token) = data
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
        {
            self.start_session(RedactedToken::new(token));
        }

        self.pipeline.decode(data)
    }

    /// `GET /auth/me`.
    pub async fn me(&self) -> Result<UserInfo, ApiError> {
        self.pipeline.send_as(RequestDescriptor::get(paths::ME)).await
    }

    /// `POST /auth/logout`. The local credential is cleared whatever the
    /// server says; the call's own outcome is still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let outcome = self
            .pipeline
            .send(RequestDescriptor::post(paths::LOGOUT, None))
            .await;

        self.pipeline.credentials().clear();
        self.cache.clear();
        info!("Logged out");

        outcome.map(|_| ())
    }

    fn start_session(&self, token: RedactedToken) {
        self.cache.clear();
        self.pipeline.credentials().set(token);
    }
}
