//! Central panel rendering

use eframe::egui;

use crate::app::ChatApp;
use crate::feed;
use crate::ui;

impl ChatApp {
    /// Render the message feed and any status toasts.
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[0])
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                let rows = feed::layout_rows(self.state.viewer(), &self.state.feed);
                ui::render_messages(ui, &rows, &theme);
            });

        ui::render_status_toasts(ctx, &self.state.status_messages, &theme);
    }
}
