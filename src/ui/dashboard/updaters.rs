//! Dashboard state update logic
//!
//! Applies flow events to the widgets they own

use super::state::DashboardState;
use crate::events::{Event, EventPayload, LogEntry, WidgetUpdate};

impl DashboardState {
    /// Advance the animation tick and apply queued events in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(LogEntry::from(&event));
            // The payload moves into its widget and is not kept anywhere else
            self.apply_event(event);
        }
    }

    /// Apply one flow event to that flow's widget.
    pub fn apply_event(&mut self, event: Event) {
        self.mark_completed(event.flow);
        match event.payload {
            EventPayload::Loaded(update) => self.apply_update(update),
            EventPayload::Failed(kind) => self.mark_unavailable(event.flow, kind),
        }
    }

    fn apply_update(&mut self, update: WidgetUpdate) {
        match update {
            WidgetUpdate::Insights(summary) => self.render_insights(summary),
            WidgetUpdate::CategoryChart(sales) => self.render_category_chart(sales),
            WidgetUpdate::MonthlyChart(sales) => self.render_monthly_chart(sales),
            WidgetUpdate::Transactions(list) => self.render_transaction_table(list),
        }
    }
}
