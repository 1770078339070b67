//! UI utility functions
//!
//! Colour and formatting helpers shared across components

use crate::data::{KpiStatus, Severity};
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Badge colour for a KPI status.
pub fn status_color(status: KpiStatus) -> Color {
    match status {
        KpiStatus::OnTrack => Color::Green,
        KpiStatus::OverLimit => Color::Red,
        KpiStatus::Warning => Color::Yellow,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

/// Rising consumption is bad, so up is red and down is green.
pub fn trend_color(trending_up: bool) -> Color {
    if trending_up { Color::Red } else { Color::Green }
}

/// Format a signed dollar change, e.g. `+$500` or `-$300`.
pub fn format_dollar_delta(delta: i64) -> String {
    if delta < 0 {
        format!("-${}", delta.unsigned_abs())
    } else {
        format!("+${}", delta)
    }
}

/// Wall-clock time of day, e.g. `14:05:09`.
pub fn format_time_of_day(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
