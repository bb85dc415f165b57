use super::paths;
use super::types::{StatsSummary, TrendPoint};
use crate::cache::{TtlCache, cache_key};
use crate::error::ApiError;
use crate::transport::{Pipeline, RequestDescriptor, Transport};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub const DEFAULT_TREND_DAYS: u32 = 7;

/// Dashboard aggregates. Both reads are memoized for the cache TTL.
pub struct StatsApi<'a, T> {
    pipeline: &'a Pipeline<T>,
    cache: &'a TtlCache<Value>,
    ttl: Duration,
}

impl<'a, T: Transport> StatsApi<'a, T> {
    pub(crate) fn new(pipeline: &'a Pipeline<T>, cache: &'a TtlCache<Value>, ttl: Duration) -> Self {
        Self {
            pipeline,
            cache,
            ttl,
        }
    }

    /// `GET /stats/summary`.
    pub async fn summary(&self) -> Result<StatsSummary, ApiError> {
        self.cached(paths::STATS_SUMMARY, Value::Null, Vec::new())
            .await
    }

    /// `GET /stats/uploads_trend?days=<days>`.
    pub async fn uploads_trend(&self, days: u32) -> Result<Vec<TrendPoint>, ApiError> {
        self.cached(
            paths::STATS_UPLOADS_TREND,
            json!({ "days": days }),
            vec![("days".to_string(), days.to_string())],
        )
        .await
    }

    /// Only payloads that decode as `R` are stored.
    async fn cached<R: DeserializeOwned>(
        &self,
        path: &str,
        params: Value,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        let key = cache_key(path, &params);
        let pipeline = self.pipeline;
        let data = self
            .cache
            .get_or_compute(&key, self.ttl, move || async move {
                let data = pipeline
                    .send(RequestDescriptor::get_with_query(path, query))
                    .await?;
                let _: R = pipeline.decode(data.clone())?;
                Ok::<Value, ApiError>(data)
            })
            .await?;
        pipeline.decode(data)
    }
}
