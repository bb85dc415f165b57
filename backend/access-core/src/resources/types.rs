//! Payload models for the console API.
//!
//! These mirror the `data` field of successful envelopes. Fields the server
//! omits fall back to their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================
// AUTH
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// What a successful login leaves the caller with. The token itself goes
/// straight into the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub expires_in: Option<u64>,
    pub user: UserInfo,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterResponse {
    pub username: String,
    pub role: String,
}

// ============================================
// MATERIALS
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MaterialRecord {
    pub id: i64,
    pub filename: String,
    /// Megabytes.
    pub filesize: Option<f64>,
    pub upload_time: Option<String>,
    pub file_path: Option<String>,
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadedMaterial {
    pub filename: String,
    pub filepath: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeletedMaterial {
    pub id: i64,
    pub filename: String,
}

/// A file to upload as material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialUpload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
    /// Stored name without extension; the server keeps the original extension.
    pub custom_name: Option<String>,
}

// ============================================
// PUBLISH TASKS
// ============================================

/// Filters for `GET /publish_tasks`. Unset fields are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishTaskQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub platform_type: Option<i64>,
    pub status: Option<String>,
    pub keyword: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl PublishTaskQuery {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_string(), value));
            }
        };

        push("page", self.page.map(|v| v.to_string()));
        push("page_size", self.page_size.map(|v| v.to_string()));
        push("platform_type", self.platform_type.map(|v| v.to_string()));
        push("status", self.status.clone());
        push("keyword", self.keyword.clone());
        push("start_date", self.start_date.clone());
        push("end_date", self.end_date.clone());

        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PublishTask {
    pub id: i64,
    pub user_id: Option<i64>,
    pub platform_type: i64,
    pub title: Option<String>,
    pub tags_json: Option<String>,
    pub enable_timer: Option<i64>,
    pub videos_per_day: Option<i64>,
    pub daily_times_json: Option<String>,
    pub start_days: Option<i64>,
    pub product_link: Option<String>,
    pub product_title: Option<String>,
    pub created_at: Option<String>,
    pub status: Option<String>,
    pub error_msg: Option<String>,
    pub items_total: Option<i64>,
    pub items_success: Option<i64>,
    pub items_failed: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PublishTaskItem {
    pub id: i64,
    pub task_id: i64,
    pub file_path: String,
    pub account_file_path: String,
    pub scheduled_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub status: Option<String>,
    pub result_msg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PublishTaskPage {
    pub items: Vec<PublishTask>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PublishTaskDetail {
    pub task: PublishTask,
    pub items: Vec<PublishTaskItem>,
}

// ============================================
// STATS
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountStats {
    pub total: u64,
    pub normal: u64,
    pub abnormal: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MaterialStats {
    pub total: u64,
    pub total_size_mb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskStats {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    pub success: u64,
    pub failed: u64,
    pub running: u64,
    pub scheduled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    pub accounts: AccountStats,
    pub materials: MaterialStats,
    pub publish_tasks: TaskStats,
    pub publish_items: ItemStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrendPoint {
    pub day: String,
    pub upload_count: u64,
    pub upload_size_mb: f64,
}
