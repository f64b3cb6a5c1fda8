//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::ChatApp;

/// Seconds a status toast stays on screen.
const STATUS_TOAST_SECS: u64 = 6;

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply snapshots and failures from the backend
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        self.state.purge_old_status_messages(STATUS_TOAST_SECS);

        // Bottom panel first so the feed gets the remaining height
        let events = self.render_input_panel(ctx);
        for event in events {
            self.handle_composer_event(event);
        }

        self.render_central_panel(ctx);
    }
}
