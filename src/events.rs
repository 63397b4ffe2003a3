//! Event System
//!
//! Messages sent by the flow workers to the dashboard, one per completed flow.

use crate::api::error::ErrorKind;
use crate::error_classifier::LogLevel;
use crate::models::{CategorySales, InsightsSummary, MonthlySales, TransactionList};
use chrono::Local;
use std::fmt::Display;

/// One of the four independent fetch-then-render units of work.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Flow {
    #[strum(to_string = "Insights")]
    Insights,
    #[strum(to_string = "Category chart")]
    CategoryChart,
    #[strum(to_string = "Monthly chart")]
    MonthlyChart,
    #[strum(to_string = "Transactions")]
    Transactions,
}

impl Flow {
    /// All flows, in the order they are started.
    pub const ALL: [Flow; 4] = [
        Flow::Insights,
        Flow::CategoryChart,
        Flow::MonthlyChart,
        Flow::Transactions,
    ];

    /// Path of the endpoint this flow fetches.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Flow::Insights => "/insights",
            Flow::CategoryChart => "/sales/category",
            Flow::MonthlyChart => "/sales/month",
            Flow::Transactions => "/transactions",
        }
    }
}

/// Parsed payload a flow hands to its widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetUpdate {
    Insights(InsightsSummary),
    CategoryChart(CategorySales),
    MonthlyChart(MonthlySales),
    Transactions(TransactionList),
}

impl WidgetUpdate {
    pub fn flow(&self) -> Flow {
        match self {
            WidgetUpdate::Insights(_) => Flow::Insights,
            WidgetUpdate::CategoryChart(_) => Flow::CategoryChart,
            WidgetUpdate::MonthlyChart(_) => Flow::MonthlyChart,
            WidgetUpdate::Transactions(_) => Flow::Transactions,
        }
    }

    fn summary(&self) -> String {
        match self {
            WidgetUpdate::Insights(_) => "summary received".to_string(),
            WidgetUpdate::CategoryChart(series) | WidgetUpdate::MonthlyChart(series)
                if series.is_empty() =>
            {
                "no data".to_string()
            }
            WidgetUpdate::CategoryChart(series) => format!("{} categories", series.len()),
            WidgetUpdate::MonthlyChart(series) => format!("{} months", series.len()),
            WidgetUpdate::Transactions(list) => format!("{} rows", list.len()),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// The flow fetched and parsed its data.
    Loaded(WidgetUpdate),
    /// The flow failed; its widget shows a placeholder.
    Failed(ErrorKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub flow: Flow,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub payload: EventPayload,
}

impl Event {
    fn new(
        flow: Flow,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        payload: EventPayload,
    ) -> Self {
        Self {
            flow,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload,
        }
    }

    pub fn loaded(update: WidgetUpdate) -> Self {
        let flow = update.flow();
        let msg = format!("{}: {}", flow, update.summary());
        Self::new(
            flow,
            msg,
            EventType::Success,
            LogLevel::Info,
            EventPayload::Loaded(update),
        )
    }

    pub fn failed(flow: Flow, kind: ErrorKind, detail: String, log_level: LogLevel) -> Self {
        let msg = format!("{}: {} ({})", flow, kind, detail);
        Self::new(
            flow,
            msg,
            EventType::Error,
            log_level,
            EventPayload::Failed(kind),
        )
    }
}

/// What the activity log keeps of an event: everything but the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub flow: Flow,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl From<&Event> for LogEntry {
    fn from(event: &Event) -> Self {
        Self {
            flow: event.flow,
            msg: event.msg.clone(),
            timestamp: event.timestamp.clone(),
            event_type: event.event_type,
            log_level: event.log_level,
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_event_carries_flow_and_summary() {
        let series = CategorySales::new(vec!["A".into(), "B".into()], vec![1.0, 2.0]).unwrap();
        let event = Event::loaded(WidgetUpdate::CategoryChart(series));
        assert_eq!(event.flow, Flow::CategoryChart);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.msg, "Category chart: 2 categories");
        assert!(LogEntry::from(&event).to_string().starts_with("Success ["));
    }

    #[test]
    fn test_empty_series_is_reported() {
        let series = MonthlySales::new(vec![], vec![]).unwrap();
        let event = Event::loaded(WidgetUpdate::MonthlyChart(series));
        assert_eq!(event.msg, "Monthly chart: no data");
    }

    #[test]
    fn test_failed_event_names_error_kind() {
        let event = Event::failed(
            Flow::Transactions,
            ErrorKind::Format,
            "expected array".to_string(),
            LogLevel::Error,
        );
        assert_eq!(event.payload, EventPayload::Failed(ErrorKind::Format));
        assert_eq!(event.msg, "Transactions: FormatError (expected array)");
    }

    #[test]
    fn test_log_entry_keeps_event_fields() {
        let event = Event::failed(
            Flow::Insights,
            ErrorKind::Network,
            "connection refused".to_string(),
            LogLevel::Warn,
        );
        let entry = LogEntry::from(&event);
        assert_eq!(entry.flow, Flow::Insights);
        assert_eq!(entry.msg, event.msg);
        assert_eq!(entry.timestamp, event.timestamp);
        assert_eq!(entry.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_endpoints_are_distinct() {
        let mut endpoints: Vec<&str> = Flow::ALL.iter().map(Flow::endpoint).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 4);
    }
}
