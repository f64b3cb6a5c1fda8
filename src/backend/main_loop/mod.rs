//! Backend main event loop: feed subscription and submit dispatch.

pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::protocol::{BackendAction, GuiEvent};
use crate::service::Services;

use handlers::Flow;

/// Wakes the UI after an event has been queued for it.
pub type RepaintFn = Arc<dyn Fn() + Send + Sync>;

/// How long to wait on the feed before checking for UI actions again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Grace period for in-flight submits when the backend stops.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Run the backend event loop on a tokio runtime.
///
/// Returns when the UI sends `BackendAction::Shutdown` or drops its
/// action sender. The feed stream is dropped on the way out.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    services: Services,
    repaint: Option<RepaintFn>,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut feed = Some(services.feed.subscribe());
        info!("subscribed to message feed");

        'outer: loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if handlers::handle_backend_action(action, &services, &event_tx) == Flow::Stop {
                            break 'outer;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("action channel closed");
                        break 'outer;
                    }
                }
            }

            if let Some(stream) = feed.as_mut() {
                match timeout(POLL_INTERVAL, stream.next()).await {
                    Ok(Some(snapshot)) => {
                        handlers::handle_snapshot(snapshot, &event_tx, repaint.as_ref());
                    }
                    Ok(None) => {
                        feed = None;
                        info!("message feed ended");
                        let _ = event_tx.send(GuiEvent::FeedClosed);
                        if let Some(repaint) = &repaint {
                            repaint();
                        }
                    }
                    Err(_) => {
                        // Timeout - this is normal, just loop
                    }
                }
            } else {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }

        drop(feed);
        info!("unsubscribed from message feed");
    });

    rt.shutdown_timeout(SHUTDOWN_GRACE);
}
