//! Session setup and initialization

use crate::api::{SalesApi, SalesApiClient};
use crate::environment::Environment;
use crate::events::Event;
use crate::logging::LogFilter;
use crate::runtime::start_dashboard_flows;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for flow events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for the flow tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// The backend the flows talk to
    pub environment: Environment,
    /// `RUST_LOG` threshold, read once at startup
    pub log_filter: LogFilter,
}

impl SessionData {
    /// Stops flows that have not finished yet.
    pub fn abort_pending(&self) {
        for handle in &self.join_handles {
            handle.abort();
        }
    }
}

/// Creates the API client and starts the four dashboard flows.
///
/// Every flow is already in flight when this returns; the caller only
/// decides how the events are shown.
pub fn setup_session(env: Environment) -> SessionData {
    let api: Arc<dyn SalesApi> = Arc::new(SalesApiClient::new(env.clone()));
    let (event_receiver, join_handles) = start_dashboard_flows(api);

    SessionData {
        event_receiver,
        join_handles,
        environment: env,
        log_filter: LogFilter::from_env(),
    }
}
