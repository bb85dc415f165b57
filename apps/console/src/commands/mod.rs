//! Subcommand execution against a [`ConsoleClient`].
//!
//! Each command returns the text for stdout. Failures were already reported
//! through the notifier by the time they reach the caller.

mod render;

pub use render::{
    render_decision, render_materials, render_summary, render_task_detail, render_task_page,
    render_trend, render_user,
};

use crate::cli::Command;
use crate::error::ConsoleError;

use access_core::router::{NavigationState, Navigator, RouteGuard, resume_target};
use access_core::resources::{MaterialUpload, RegisterRequest};
use access_core::transport::{ProgressSink, ReqwestTransport, Transport};
use access_core::ConsoleClient;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use log::{debug, info};

pub struct Context<T = ReqwestTransport> {
    client: ConsoleClient<T>,
    guard: RouteGuard,
    navigator: Arc<NavigationState>,
}

impl<T: Transport> Context<T> {
    pub fn new(client: ConsoleClient<T>, guard: RouteGuard, navigator: Arc<NavigationState>) -> Self {
        Self {
            client,
            guard,
            navigator,
        }
    }

    /// Route the session is currently on.
    pub fn current_route(&self) -> String {
        self.navigator.current_route()
    }

    pub async fn run(&self, command: Command) -> Result<String, ConsoleError> {
        debug!("Running {}", command.name());

        match command {
            Command::Login {
                username,
                password,
                redirect,
            } => {
                let session = self.client.auth().login(&username, &password).await?;
                let target = resume_target(redirect.as_deref());
                self.navigator.navigate(&target);
                Ok(format!(
                    "Logged in as {} ({})\nContinue at {target}",
                    session.user.username, session.user.role
                ))
            }
            Command::Register {
                username,
                password,
                role,
            } => {
                let request = RegisterRequest {
                    username,
                    password,
                    role,
                };
                let created = self.client.auth().register(&request).await?;
                Ok(format!("Registered {} ({})", created.username, created.role))
            }
            Command::Logout => {
                self.client.auth().logout().await?;
                Ok(String::from("Logged out"))
            }
            Command::Me => Ok(render_user(&self.client.auth().me().await?)),
            Command::Materials => Ok(render_materials(&self.client.materials().list().await?)),
            Command::Upload { file, name, mime } => {
                let upload = read_upload(&file, name, mime).await?;
                let stored = self
                    .client
                    .materials()
                    .upload(upload, Some(progress_logger()))
                    .await?;
                Ok(format!("Uploaded {} -> {}", stored.filename, stored.filepath))
            }
            Command::DeleteMaterial { id } => {
                let deleted = self.client.materials().delete(id).await?;
                Ok(format!("Deleted #{} {}", deleted.id, deleted.filename))
            }
            Command::DownloadUrl { file_path } => {
                Ok(self.client.materials().download_url(&file_path))
            }
            Command::PreviewUrl { filename } => Ok(self.client.materials().preview_url(&filename)),
            Command::Tasks(filters) => {
                let page = self.client.publish().list_tasks(&filters.into()).await?;
                Ok(render_task_page(&page))
            }
            Command::Task { id } => Ok(render_task_detail(&self.client.publish().get_task(id).await?)),
            Command::Summary => Ok(render_summary(&self.client.stats().summary().await?)),
            Command::Trend { days } => {
                Ok(render_trend(&self.client.stats().uploads_trend(days).await?))
            }
            Command::Route { path } => {
                let decision = self.guard.evaluate(&path);
                self.navigator.navigate(&decision.location(&path));
                Ok(render_decision(&path, &decision))
            }
        }
    }
}

async fn read_upload(
    file: &Path,
    custom_name: Option<String>,
    mime: Option<String>,
) -> Result<MaterialUpload, ConsoleError> {
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ConsoleError::console(format!("Not a file path: {}", file.display())))?
        .to_string();

    let bytes = tokio::fs::read(file)
        .await
        .map_err(|e| ConsoleError::console(format!("Failed to read {}: {e}", file.display())))?;

    info!("Uploading {file_name} ({} bytes)", bytes.len());

    Ok(MaterialUpload {
        file_name,
        mime,
        bytes,
        custom_name,
    })
}

/// Logs upload progress in 10% steps.
fn progress_logger() -> ProgressSink {
    let last_step = AtomicU8::new(0);
    ProgressSink::new(move |progress| {
        let step = progress.percent() / 10;
        if last_step.fetch_max(step, Ordering::SeqCst) < step {
            info!(
                "Upload {}% ({}/{} bytes)",
                progress.percent(),
                progress.loaded,
                progress.total
            );
        }
    })
}
