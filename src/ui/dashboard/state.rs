//! Dashboard state management
//!
//! Owns the four widgets. Each widget is written only by its own flow.

use super::widgets::{ChartConfig, TransactionTable, WidgetStatus, insights_lines};
use crate::api::error::ErrorKind;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event, Flow, LogEntry};
use crate::logging::LogFilter;
use crate::models::{CategorySales, InsightsSummary, MonthlySales, TransactionList};

use std::collections::{HashSet, VecDeque};

#[derive(Debug)]
pub struct DashboardState {
    /// The backend the flows talk to.
    pub environment: Environment,
    /// Which failures reach the activity log.
    pub log_filter: LogFilter,
    /// Whether to paint a background color
    pub with_background_color: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display. Payloads are not kept here.
    pub activity_logs: VecDeque<LogEntry>,
    /// Animation tick counter
    pub tick: usize,

    insights: WidgetStatus<Vec<String>>,
    category_chart: WidgetStatus<ChartConfig>,
    monthly_chart: WidgetStatus<ChartConfig>,
    transactions: TransactionTable,
    /// First visible transaction row
    transactions_offset: usize,
    /// Flows that delivered an event, successful or not
    completed_flows: HashSet<Flow>,
}

impl DashboardState {
    pub fn new(
        environment: Environment,
        log_filter: LogFilter,
        with_background_color: bool,
    ) -> Self {
        Self {
            environment,
            log_filter,
            with_background_color,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            insights: WidgetStatus::Loading,
            category_chart: WidgetStatus::Loading,
            monthly_chart: WidgetStatus::Loading,
            transactions: TransactionTable::default(),
            transactions_offset: 0,
            completed_flows: HashSet::new(),
        }
    }

    pub fn insights(&self) -> &WidgetStatus<Vec<String>> {
        &self.insights
    }

    pub fn category_chart(&self) -> &WidgetStatus<ChartConfig> {
        &self.category_chart
    }

    pub fn monthly_chart(&self) -> &WidgetStatus<ChartConfig> {
        &self.monthly_chart
    }

    pub fn transactions(&self) -> &TransactionTable {
        &self.transactions
    }

    pub fn transactions_offset(&self) -> usize {
        self.transactions_offset
    }

    pub fn completed_flows(&self) -> usize {
        self.completed_flows.len()
    }

    pub(super) fn mark_completed(&mut self, flow: Flow) {
        self.completed_flows.insert(flow);
    }

    /// Replaces the insights text block.
    pub fn render_insights(&mut self, summary: InsightsSummary) {
        self.insights = WidgetStatus::Ready(insights_lines(&summary));
    }

    /// Creates or replaces the category bar chart.
    pub fn render_category_chart(&mut self, sales: CategorySales) {
        self.category_chart = WidgetStatus::Ready(ChartConfig::category_bar(sales));
    }

    /// Creates or replaces the monthly line chart.
    pub fn render_monthly_chart(&mut self, sales: MonthlySales) {
        self.monthly_chart = WidgetStatus::Ready(ChartConfig::monthly_line(sales));
    }

    /// Appends the transactions to the table body.
    pub fn render_transaction_table(&mut self, transactions: TransactionList) {
        self.transactions.append(transactions);
    }

    /// Shows the placeholder in the widget owned by `flow`.
    pub fn mark_unavailable(&mut self, flow: Flow, kind: ErrorKind) {
        match flow {
            Flow::Insights => self.insights = WidgetStatus::Unavailable(kind),
            Flow::CategoryChart => self.category_chart = WidgetStatus::Unavailable(kind),
            Flow::MonthlyChart => self.monthly_chart = WidgetStatus::Unavailable(kind),
            Flow::Transactions => self.transactions.mark_unavailable(kind),
        }
    }

    pub fn scroll_transactions_down(&mut self, rows: usize) {
        let last = self.transactions.rows().len().saturating_sub(1);
        self.transactions_offset = (self.transactions_offset + rows).min(last);
    }

    pub fn scroll_transactions_up(&mut self, rows: usize) {
        self.transactions_offset = self.transactions_offset.saturating_sub(rows);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, entry: LogEntry) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(entry);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
