//! Dashboard utility functions
//!
//! Pure formatting helpers shared by the dashboard components and the
//! one-shot commands.

use chrono::{DateTime, Local, Utc};
use ratatui::prelude::Color;
use std::time::Duration;

/// Format a node success rate with one decimal, e.g. `90.0%`.
pub fn format_success_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Format a reputation score out of 100, e.g. `87.3/100`.
pub fn format_reputation(score: f64) -> String {
    format!("{:.1}/100", score)
}

/// Region shown for a node that did not report one.
pub fn region_label(region: Option<&str>) -> &str {
    region.unwrap_or("unknown")
}

/// Color used for a node or job status badge.
pub fn status_color(status: &str) -> Color {
    match status.to_ascii_lowercase().as_str() {
        "online" | "completed" => Color::Green,
        "busy" | "running" | "assigned" => Color::Yellow,
        "failed" | "error" => Color::Red,
        "pending" | "queued" => Color::LightBlue,
        _ => Color::Gray,
    }
}

/// Color for a success rate.
pub fn success_rate_color(rate: f64) -> Color {
    if rate >= 90.0 {
        Color::Green
    } else if rate >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Submission time in the local timezone.
pub fn format_submitted(submitted_at: &DateTime<Utc>) -> String {
    submitted_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Time of the last successful refresh, or `never`.
pub fn format_last_update(last_update: Option<&DateTime<Local>>) -> String {
    match last_update {
        Some(at) => at.format("%H:%M:%S").to_string(),
        None => "never".to_string(),
    }
}

/// Session uptime, e.g. `1h 2m 3s`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Shorten `value` to at most `max_chars` characters, ending with `...`.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = value.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}
