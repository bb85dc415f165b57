//! Command-line surface of the console.

use access_core::API_BASE_URL_ENV;
use access_core::resources::{DEFAULT_TREND_DAYS, PublishTaskQuery};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sau-console", version, about = "Admin console for the publishing backend")]
pub struct Cli {
    /// Directory holding console.toml
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, env = API_BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Route to continue at after login (the `redirect` query of /login)
        #[arg(long)]
        redirect: Option<String>,
    },
    /// Create a user
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// End the session and forget the token
    Logout,
    /// Show the logged-in user
    Me,
    /// List uploaded materials
    Materials,
    /// Upload a material file
    Upload {
        file: PathBuf,
        /// Stored name without extension
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        mime: Option<String>,
    },
    /// Delete a material by id
    DeleteMaterial { id: i64 },
    /// Print a download link for a stored file
    DownloadUrl { file_path: String },
    /// Print a preview link for a stored file
    PreviewUrl { filename: String },
    /// List publish tasks
    Tasks(TaskFilters),
    /// Show one publish task with its items
    Task { id: i64 },
    /// Dashboard summary
    Summary,
    /// Daily upload trend
    Trend {
        #[arg(long, default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,
    },
    /// Evaluate a console route against the stored session
    Route { path: String },
}

impl Command {
    /// Subcommand name as typed, safe to log (no arguments).
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Register { .. } => "register",
            Command::Logout => "logout",
            Command::Me => "me",
            Command::Materials => "materials",
            Command::Upload { .. } => "upload",
            Command::DeleteMaterial { .. } => "delete-material",
            Command::DownloadUrl { .. } => "download-url",
            Command::PreviewUrl { .. } => "preview-url",
            Command::Tasks(_) => "tasks",
            Command::Task { .. } => "task",
            Command::Summary => "summary",
            Command::Trend { .. } => "trend",
            Command::Route { .. } => "route",
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TaskFilters {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
    #[arg(long)]
    pub platform_type: Option<i64>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub keyword: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,
}

impl From<TaskFilters> for PublishTaskQuery {
    fn from(filters: TaskFilters) -> Self {
        PublishTaskQuery {
            page: filters.page,
            page_size: filters.page_size,
            platform_type: filters.platform_type,
            status: filters.status,
            keyword: filters.keyword,
            start_date: filters.start_date,
            end_date: filters.end_date,
        }
    }
}
