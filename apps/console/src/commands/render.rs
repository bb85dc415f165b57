use access_core::resources::{
    MaterialRecord, PublishTaskDetail, PublishTaskPage, StatsSummary, TrendPoint, UserInfo,
};
use access_core::router::NavigationDecision;

use std::fmt::Write;

const NONE: &str = "-";

pub fn render_user(user: &UserInfo) -> String {
    format!("#{} {} ({})", user.id, user.username, user.role)
}

pub fn render_materials(materials: &[MaterialRecord]) -> String {
    if materials.is_empty() {
        return String::from("No materials");
    }

    let mut out = String::new();
    for material in materials {
        let _ = writeln!(
            out,
            "#{:<5} {:<40} {:>9} MB  {}",
            material.id,
            material.filename,
            material
                .filesize
                .map_or_else(|| NONE.to_string(), |size| format!("{size:.2}")),
            material.upload_time.as_deref().unwrap_or(NONE),
        );
    }
    out.trim_end().to_string()
}

pub fn render_task_page(page: &PublishTaskPage) -> String {
    let mut out = format!(
        "Page {} ({} per page), {} tasks total\n",
        page.page, page.page_size, page.total
    );
    for task in &page.items {
        let _ = writeln!(
            out,
            "#{:<5} platform {:<2} {:<10} {}/{} ok  {}",
            task.id,
            task.platform_type,
            task.status.as_deref().unwrap_or(NONE),
            task.items_success.unwrap_or(0),
            task.items_total.unwrap_or(0),
            task.title.as_deref().unwrap_or(NONE),
        );
    }
    out.trim_end().to_string()
}

pub fn render_task_detail(detail: &PublishTaskDetail) -> String {
    let task = &detail.task;
    let mut out = format!(
        "Task #{} platform {} status {}\n",
        task.id,
        task.platform_type,
        task.status.as_deref().unwrap_or(NONE)
    );
    if let Some(error) = task.error_msg.as_deref().filter(|e| !e.is_empty()) {
        let _ = writeln!(out, "Error: {error}");
    }
    for item in &detail.items {
        let _ = writeln!(
            out,
            "  item #{:<5} {:<10} {}  {}",
            item.id,
            item.status.as_deref().unwrap_or(NONE),
            item.file_path,
            item.result_msg.as_deref().unwrap_or(""),
        );
    }
    out.trim_end().to_string()
}

pub fn render_summary(summary: &StatsSummary) -> String {
    let StatsSummary {
        accounts,
        materials,
        publish_tasks,
        publish_items,
    } = summary;

    format!(
        "Accounts   {} total, {} normal, {} abnormal\n\
         Materials  {} files, {:.2} MB\n\
         Tasks      {} total, {} succeeded, {} failed\n\
         Items      {} succeeded, {} failed, {} running, {} scheduled",
        accounts.total,
        accounts.normal,
        accounts.abnormal,
        materials.total,
        materials.total_size_mb,
        publish_tasks.total,
        publish_tasks.success,
        publish_tasks.failed,
        publish_items.success,
        publish_items.failed,
        publish_items.running,
        publish_items.scheduled,
    )
}

pub fn render_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return String::from("No uploads");
    }

    points
        .iter()
        .map(|point| {
            format!(
                "{}  {:>4} uploads  {:>9.2} MB",
                point.day, point.upload_count, point.upload_size_mb
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_decision(requested: &str, decision: &NavigationDecision) -> String {
    match decision {
        NavigationDecision::Allowed => format!("Allowed: {requested}"),
        NavigationDecision::Redirected { .. } => {
            format!("Redirect: {}", decision.location(requested))
        }
    }
}
