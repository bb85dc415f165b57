use super::paths;
use super::types::{PublishTaskDetail, PublishTaskPage, PublishTaskQuery};
use crate::error::ApiError;
use crate::transport::{Pipeline, RequestDescriptor, Transport};

pub struct PublishApi<'a, T> {
    pipeline: &'a Pipeline<T>,
}

impl<'a, T: Transport> PublishApi<'a, T> {
    pub(crate) fn new(pipeline: &'a Pipeline<T>) -> Self {
        Self { pipeline }
    }

    /// `GET /publish_tasks` with the set filters.
    pub async fn list_tasks(&self, query: &PublishTaskQuery) -> Result<PublishTaskPage, ApiError> {
        self.pipeline
            .send_as(RequestDescriptor::get_with_query(
                paths::PUBLISH_TASKS,
                query.to_query_pairs(),
            ))
            .await
    }

    /// `GET /publish_tasks/<id>`.
    pub async fn get_task(&self, task_id: i64) -> Result<PublishTaskDetail, ApiError> {
        self.pipeline
            .send_as(RequestDescriptor::get(format!(
                "{}/{task_id}",
                paths::PUBLISH_TASKS
            )))
            .await
    }
}
