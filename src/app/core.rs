//! Core ChatApp struct definition, initialization and teardown

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

use crate::backend::{run_backend, RepaintFn};
use crate::config::{save_settings, Settings};
use crate::composer::ComposerEvent;
use crate::protocol::{BackendAction, GuiEvent};
use crate::service::Services;
use crate::state::ClientState;
use crate::ui;

pub struct ChatApp {
    // Feed snapshot, composer fields and status lines
    pub state: ClientState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // "light" or "dark"
    pub theme: String,

    backend: Option<JoinHandle<()>>,
    persist_settings: bool,
}

impl ChatApp {
    pub(super) fn get_theme(&self) -> ui::ChatTheme {
        ui::ChatTheme::from_name(&self.theme)
    }

    /// Create the app inside an eframe window and start the backend thread.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, services: Services) -> Self {
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let egui_ctx = cc.egui_ctx.clone();
        let repaint: RepaintFn = Arc::new(move || egui_ctx.request_repaint());

        // Spawn the backend thread
        let backend = thread::Builder::new()
            .name("chat-backend".into())
            .spawn(move || run_backend(action_rx, event_tx, services, Some(repaint)));
        let backend = match backend {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "failed to spawn backend thread");
                None
            }
        };

        ui::apply_app_style(&cc.egui_ctx, &ui::ChatTheme::from_name(&settings.theme));

        let mut app = Self::with_channels(settings, action_tx, event_rx);
        app.backend = backend;
        app.persist_settings = true;
        if app.backend.is_none() {
            app.state.push_status("⚠ Backend failed to start");
        }
        app
    }

    /// Build the app around existing channel endpoints. No backend thread is
    /// started and settings are not written on drop.
    pub fn with_channels(
        settings: Settings,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
    ) -> Self {
        Self {
            state: ClientState::new(settings.user),
            action_tx,
            event_rx,
            theme: settings.theme,
            backend: None,
            persist_settings: false,
        }
    }

    /// Apply one composer event and forward the resulting submit, if any.
    pub fn handle_composer_event(&mut self, event: ComposerEvent) {
        let Some(post) = self.state.apply_composer_event(event) else {
            return;
        };
        info!(user = %post.user, len = post.content.len(), "submitting message");
        if self.action_tx.send(BackendAction::PostMessage(post)).is_err() {
            warn!("backend is not running, message dropped");
            self.state.push_status("⚠ Message not sent: backend is not running");
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            user: self.state.composer.user.clone(),
            theme: self.theme.clone(),
        }
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        // Tear down the subscription before the window goes away
        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            if handle.join().is_err() {
                warn!("backend thread panicked");
            }
        }

        if self.persist_settings {
            if let Err(e) = save_settings(&self.settings()) {
                warn!(error = %e, "failed to save settings");
            }
        }
    }
}
