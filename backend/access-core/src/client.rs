use crate::cache::{DEFAULT_TTL, TtlCache};
use crate::config::ClientConfig;
use crate::credential::CredentialStore;
use crate::error::CoreError;
use crate::resources::{AuthApi, MaterialApi, PublishApi, StatsApi};
use crate::router::Navigator;
use crate::transport::{Notifier, Pipeline, ReqwestTransport, Transport};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use serde_json::Value;

/// Entry point for views: one pipeline plus the stats cache, handed out as
/// per-resource façades.
pub struct ConsoleClient<T = ReqwestTransport> {
    pipeline: Pipeline<T>,
    stats_cache: TtlCache<Value>,
    cache_ttl: Duration,
}

impl ConsoleClient<ReqwestTransport> {
    /// Wire a reqwest-backed client from configuration.
    pub fn from_config(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, CoreError> {
        let base_url = config.base_url()?;
        let transport = ReqwestTransport::new(config.request_timeout(), config.connect_timeout())?;

        info!("Console client targeting {base_url}");

        let pipeline = Pipeline::new(transport, base_url, credentials, notifier, navigator);
        let stats_cache = match config.cache.max_entries {
            Some(max) => TtlCache::with_max_entries(max),
            None => TtlCache::new(),
        };

        Ok(Self {
            pipeline,
            stats_cache,
            cache_ttl: config.cache_ttl(),
        })
    }
}

impl<T: Transport> ConsoleClient<T> {
    /// Client over an existing pipeline with the default 10s TTL.
    pub fn new(pipeline: Pipeline<T>) -> Self {
        Self {
            pipeline,
            stats_cache: TtlCache::new(),
            cache_ttl: DEFAULT_TTL,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(&self.pipeline, &self.stats_cache)
    }

    pub fn materials(&self) -> MaterialApi<'_, T> {
        MaterialApi::new(&self.pipeline)
    }

    pub fn publish(&self) -> PublishApi<'_, T> {
        PublishApi::new(&self.pipeline)
    }

    pub fn stats(&self) -> StatsApi<'_, T> {
        StatsApi::new(&self.pipeline, &self.stats_cache, self.cache_ttl)
    }

    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        self.pipeline.credentials()
    }
}
