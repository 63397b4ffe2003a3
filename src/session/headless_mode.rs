//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::LogEntry;
use crate::ui::dashboard::{DashboardState, render_plain};
use std::error::Error;

/// Runs the application in headless mode
///
/// Prints each flow event as it arrives, then the four widgets as text once
/// every flow has reported. Ctrl+C stops early and prints what has loaded.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.api_url());

    let mut state = DashboardState::new(session.environment.clone(), session.log_filter, false);

    // Flows drop their senders when done, which closes the channel
    loop {
        tokio::select! {
            event = session.event_receiver.recv() => {
                let Some(event) = event else { break };
                let entry = LogEntry::from(&event);
                if session.log_filter.shows(&entry) {
                    println!("{}", entry);
                }
                state.add_event(event);
            }
            _ = tokio::signal::ctrl_c() => {
                print_session_shutdown();
                session.abort_pending();
                break;
            }
        }
    }

    state.update();
    println!();
    println!("{}", render_plain(&state));

    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
