use super::paths;
use super::types::{DeletedMaterial, MaterialRecord, MaterialUpload, UploadedMaterial};
use crate::error::ApiError;
use crate::links;
use crate::transport::{Pipeline, ProgressSink, RequestDescriptor, Transport, UploadForm};

pub struct MaterialApi<'a, T> {
    pipeline: &'a Pipeline<T>,
}

impl<'a, T: Transport> MaterialApi<'a, T> {
    pub(crate) fn new(pipeline: &'a Pipeline<T>) -> Self {
        Self { pipeline }
    }

    /// `GET /getFiles`.
    pub async fn list(&self) -> Result<Vec<MaterialRecord>, ApiError> {
        self.pipeline
            .send_as(RequestDescriptor::get(paths::MATERIALS))
            .await
    }

    /// Multipart `POST /uploadSave` with a `file` part and optional `filename` field.
    pub async fn upload(
        &self,
        upload: MaterialUpload,
        progress: Option<ProgressSink>,
    ) -> Result<UploadedMaterial, ApiError> {
        let MaterialUpload {
            file_name,
            mime,
            bytes,
            custom_name,
        } = upload;

        let mut form = UploadForm::new().file("file", file_name, mime, bytes);
        if let Some(name) = custom_name.filter(|n| !n.is_empty()) {
            form = form.text("filename", name);
        }

        self.pipeline
            .send_as(RequestDescriptor::upload(paths::UPLOAD_MATERIAL, form, progress))
            .await
    }

    /// `GET /deleteFile?id=<id>`.
    pub async fn delete(&self, id: i64) -> Result<DeletedMaterial, ApiError> {
        self.pipeline
            .send_as(RequestDescriptor::get_with_query(
                paths::DELETE_MATERIAL,
                vec![("id".to_string(), id.to_string())],
            ))
            .await
    }

    pub fn download_url(&self, file_path: &str) -> String {
        let token = self.pipeline.credentials().get();
        links::download_url(&link_base(self.pipeline), file_path, token.as_ref())
    }

    pub fn preview_url(&self, filename: &str) -> String {
        let token = self.pipeline.credentials().get();
        links::preview_url(&link_base(self.pipeline), filename, token.as_ref())
    }
}

fn link_base<T: Transport>(pipeline: &Pipeline<T>) -> String {
    pipeline.base_url().as_str().trim_end_matches('/').to_string()
}
