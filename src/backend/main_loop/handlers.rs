//! Handlers for UI actions and feed snapshots.

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use super::RepaintFn;
use crate::protocol::{BackendAction, GuiEvent, Message, PostMessage};
use crate::service::Services;

/// Whether the main loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Handle a backend action from the GUI
pub fn handle_backend_action(
    action: BackendAction,
    services: &Services,
    event_tx: &Sender<GuiEvent>,
) -> Flow {
    match action {
        BackendAction::PostMessage(message) => {
            spawn_submit(message, services, event_tx);
            Flow::Continue
        }
        BackendAction::Shutdown => {
            debug!("shutdown requested");
            Flow::Stop
        }
    }
}

/// Fire-and-forget submit. Failures are logged and reported, never retried.
fn spawn_submit(message: PostMessage, services: &Services, event_tx: &Sender<GuiEvent>) {
    let poster = services.poster.clone();
    let event_tx = event_tx.clone();

    tokio::spawn(async move {
        let content = message.content.clone();
        match poster.post_message(message).await {
            Ok(()) => debug!("message submitted"),
            Err(e) => {
                warn!(error = %e, "submit failed");
                let _ = event_tx.send(GuiEvent::SubmitFailed {
                    content,
                    reason: e.to_string(),
                });
            }
        }
    });
}

/// Forward a snapshot to the UI and wake it.
pub fn handle_snapshot(
    snapshot: Vec<Message>,
    event_tx: &Sender<GuiEvent>,
    repaint: Option<&RepaintFn>,
) {
    debug!(count = snapshot.len(), "feed snapshot");
    let _ = event_tx.send(GuiEvent::Snapshot(snapshot));
    if let Some(repaint) = repaint {
        repaint();
    }
}
