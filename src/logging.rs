//! Activity log filtering
//!
//! `RUST_LOG` decides which failed flows show up in the activity log and in
//! headless output. Loaded flows are always shown.

use crate::error_classifier::LogLevel;
use crate::events::{EventType, LogEntry};
use std::env;

/// Directive target that addresses this binary, e.g. `sales_dashboard=warn`.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Display threshold for flow events, read once per session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LogFilter {
    threshold: LogLevel,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogFilter {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// Threshold from `RUST_LOG`, or `info` when it is unset.
    pub fn from_env() -> Self {
        env::var("RUST_LOG")
            .map(|directives| Self::parse(&directives))
            .unwrap_or_default()
    }

    /// Parses `RUST_LOG` directives.
    ///
    /// A `sales_dashboard=<level>` directive wins over a bare `<level>`.
    /// Directives for other crates are ignored.
    pub fn parse(directives: &str) -> Self {
        let mut bare = None;
        for directive in directives.split(',').map(str::trim) {
            match directive.split_once('=') {
                Some((target, level)) if target.trim() == CRATE_TARGET => {
                    if let Some(level) = parse_level(level) {
                        return Self::new(level);
                    }
                }
                Some(_) => {}
                None => bare = bare.or(parse_level(directive)),
            }
        }
        Self::new(bare.unwrap_or(LogLevel::Info))
    }

    /// Whether an activity log entry passes the threshold.
    pub fn shows(&self, entry: &LogEntry) -> bool {
        entry.event_type == EventType::Success || entry.log_level >= self.threshold
    }
}

fn parse_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        // Failures are never hidden completely
        "off" => Some(LogLevel::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use crate::events::{Event, Flow, WidgetUpdate};
    use crate::models::InsightsSummary;

    fn failure(level: LogLevel) -> LogEntry {
        LogEntry::from(&Event::failed(
            Flow::CategoryChart,
            ErrorKind::Network,
            "connection refused".to_string(),
            level,
        ))
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(LogFilter::parse("debug"), LogFilter::new(LogLevel::Debug));
        assert_eq!(LogFilter::parse("WARNING"), LogFilter::new(LogLevel::Warn));
        assert_eq!(LogFilter::parse("error"), LogFilter::new(LogLevel::Error));
        assert_eq!(LogFilter::parse("invalid"), LogFilter::new(LogLevel::Info));
        assert_eq!(LogFilter::parse(""), LogFilter::new(LogLevel::Info));
    }

    #[test]
    fn test_crate_directive_wins_over_bare_level() {
        let filter = LogFilter::parse("debug, reqwest=trace, sales_dashboard=error");
        assert_eq!(filter, LogFilter::new(LogLevel::Error));
    }

    #[test]
    fn test_other_crate_directives_are_ignored() {
        assert_eq!(LogFilter::parse("hyper=trace"), LogFilter::new(LogLevel::Info));
        assert_eq!(
            LogFilter::parse("hyper=trace,warn"),
            LogFilter::new(LogLevel::Warn)
        );
    }

    #[test]
    fn test_warn_failures_hidden_at_error_threshold() {
        let filter = LogFilter::new(LogLevel::Error);
        assert!(!filter.shows(&failure(LogLevel::Warn)));
        assert!(filter.shows(&failure(LogLevel::Error)));
    }

    #[test]
    fn test_loaded_flows_always_shown() {
        let loaded = LogEntry::from(&Event::loaded(WidgetUpdate::Insights(InsightsSummary {
            total_sales: 1.0,
            average_age: 30.0,
            male_count: 1,
            female_count: 1,
        })));
        assert!(LogFilter::new(LogLevel::Error).shows(&loaded));
    }
}
