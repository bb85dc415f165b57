//! Thin per-resource façades over the pipeline.
//!
//! Each operation maps to one fixed path and verb. Only two get special
//! treatment: stats reads go through the TTL cache, material uploads use the
//! multipart variant.

mod auth;
mod material;
mod publish;
mod stats;
pub mod types;

pub use auth::AuthApi;
pub use material::MaterialApi;
pub use publish::PublishApi;
pub use stats::{DEFAULT_TREND_DAYS, StatsApi};
pub use types::*;

pub(crate) mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const ME: &str = "/auth/me";
    pub const LOGOUT: &str = "/auth/logout";

    pub const MATERIALS: &str = "/getFiles";
    pub const UPLOAD_MATERIAL: &str = "/uploadSave";
    pub const DELETE_MATERIAL: &str = "/deleteFile";

    pub const PUBLISH_TASKS: &str = "/publish_tasks";

    pub const STATS_SUMMARY: &str = "/stats/summary";
    pub const STATS_UPLOADS_TREND: &str = "/stats/uploads_trend";
}
