//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::widgets::Rgba;
use crate::events::Flow;
use ratatui::prelude::Color;

/// Get a ratatui color for a flow's log lines
pub fn get_flow_color(flow: &Flow) -> Color {
    match flow {
        Flow::Insights => Color::LightGreen,
        Flow::CategoryChart => Color::LightBlue,
        Flow::MonthlyChart => Color::LightRed,
        Flow::Transactions => Color::Yellow,
    }
}

/// Terminal color for a chart color; alpha is dropped.
pub fn rgba_to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Replace verbose reqwest error details with a short summary
pub fn clean_http_error_message(msg: &str) -> String {
    let Some(start) = msg.find("Reqwest error") else {
        return msg.to_string();
    };
    let summary = if msg.contains("timed out") {
        "request timed out"
    } else if msg.contains("error sending request") {
        "could not reach the sales API"
    } else {
        "network error"
    };
    let prefix = &msg[..start];
    if prefix.ends_with('(') {
        format!("{}{})", prefix, summary)
    } else {
        format!("{}{}", prefix, summary)
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with '…'.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
