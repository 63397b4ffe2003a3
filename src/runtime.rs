//! Startup of the four dashboard flows

use crate::api::SalesApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::{Event, Flow};
use crate::workers::{EventSender, FlowWorker};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawns one task per flow and returns the channel their events arrive on.
///
/// The flows share nothing but the API client and run with no ordering
/// between them; events arrive in the order responses complete.
pub fn start_dashboard_flows(
    api: Arc<dyn SalesApi>,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);

    let join_handles = Flow::ALL
        .iter()
        .map(|flow| {
            let worker = FlowWorker::new(*flow, api.clone(), event_sender.clone());
            tokio::spawn(worker.run())
        })
        .collect();

    (event_receiver, join_handles)
}
