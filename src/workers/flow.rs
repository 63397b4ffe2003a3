//! A single fetch-then-render flow

use super::core::EventSender;
use crate::api::SalesApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, Flow, WidgetUpdate};
use std::sync::Arc;

/// Fetches one endpoint, parses it, and hands the result to the dashboard.
///
/// Failures stay inside the worker: they become a failure event for this
/// flow's widget and never reach the other flows.
pub struct FlowWorker {
    flow: Flow,
    api: Arc<dyn SalesApi>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl FlowWorker {
    pub fn new(flow: Flow, api: Arc<dyn SalesApi>, event_sender: EventSender) -> Self {
        Self {
            flow,
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    pub async fn run(self) {
        let event = match self.fetch().await {
            Ok(update) => Event::loaded(update),
            Err(e) => Event::failed(
                self.flow,
                e.kind(),
                e.to_string(),
                self.classifier.classify_fetch_error(&e),
            ),
        };
        self.event_sender.send_event(event).await;
    }

    async fn fetch(&self) -> Result<WidgetUpdate, ApiError> {
        let api = self.api.as_ref();
        match self.flow {
            Flow::Insights => api.get_insights().await.map(WidgetUpdate::Insights),
            Flow::CategoryChart => api
                .get_sales_by_category()
                .await
                .map(WidgetUpdate::CategoryChart),
            Flow::MonthlyChart => api
                .get_sales_by_month()
                .await
                .map(WidgetUpdate::MonthlyChart),
            Flow::Transactions => api
                .get_transactions()
                .await
                .map(WidgetUpdate::Transactions),
        }
    }
}
