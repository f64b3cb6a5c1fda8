//! Composer panel at the bottom of the window

use eframe::egui;

use crate::app::ChatApp;
use crate::composer::ComposerEvent;
use crate::ui;

impl ChatApp {
    /// Render the composer and return the events it produced.
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) -> Vec<ComposerEvent> {
        let theme = self.get_theme();
        let mut events = Vec::new();

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                events = ui::render_composer(ui, &self.state.composer);
            });

        events
    }
}
