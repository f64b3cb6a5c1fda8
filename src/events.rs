//! Backend event processing (snapshots, feed end, submit failures).

use crossbeam_channel::Receiver;
use tracing::{debug, error, warn};

use crate::protocol::GuiEvent;
use crate::state::ClientState;

/// Drain all pending events from the backend. Returns how many were handled.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut ClientState) -> usize {
    let mut handled = 0;
    while let Ok(event) = event_rx.try_recv() {
        process_single_event(state, event);
        handled += 1;
    }
    handled
}

pub fn process_single_event(state: &mut ClientState, event: GuiEvent) {
    match event {
        GuiEvent::Snapshot(messages) => {
            debug!(count = messages.len(), "applying snapshot");
            state.feed.apply_snapshot(messages);
        }

        GuiEvent::FeedClosed => {
            state.feed_closed = true;
            state.push_status("Message feed closed");
        }

        GuiEvent::SubmitFailed { content, reason } => {
            // The draft stays cleared; the user only gets told.
            warn!(%reason, len = content.len(), "message was not delivered");
            state.push_status(format!("⚠ Message not sent: {}", reason));
        }

        GuiEvent::Error(msg) => {
            error!(%msg, "backend error");
            state.push_status(format!("⚠ Error: {}", msg));
        }
    }
}
