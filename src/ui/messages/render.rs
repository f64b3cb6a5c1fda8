//! Row rendering: own messages on the right, others on the left with an avatar.

use eframe::egui;

use crate::feed::{FeedRow, Side};
use crate::ui::theme::{self, ChatTheme};

/// Diameter of the sender avatar.
pub const AVATAR_SIZE: f32 = 50.0;
/// Bubbles never take more than this share of the row.
pub const BUBBLE_MAX_WIDTH_FRACTION: f32 = 0.6;

const AVATAR_GAP: f32 = 8.0;
const ROW_SPACING: f32 = 16.0;
const BUBBLE_RADIUS: f32 = 16.0;

/// Render the feed rows. Nothing is drawn for an empty slice.
pub fn render_messages(ui: &mut egui::Ui, rows: &[FeedRow<'_>], theme: &ChatTheme) {
    if rows.is_empty() {
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for row in rows {
                ui.push_id(row.id.as_str(), |ui| render_row(ui, row, theme));
                ui.add_space(ROW_SPACING);
            }
        });
}

fn render_row(ui: &mut egui::Ui, row: &FeedRow<'_>, theme: &ChatTheme) {
    let max_bubble_width = ui.available_width() * BUBBLE_MAX_WIDTH_FRACTION;

    match row.side {
        Side::Own => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                render_bubble(ui, row.content, theme.own_bubble, theme.own_text, max_bubble_width);
            });
        }
        Side::Other => {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                let label = row.label.as_deref().unwrap_or_default();
                theme::render_avatar(ui, label, AVATAR_SIZE, theme).on_hover_text(row.user);
                ui.add_space(AVATAR_GAP);
                render_bubble(ui, row.content, theme.other_bubble, theme.other_text, max_bubble_width);
            });
        }
    }
}

fn render_bubble(ui: &mut egui::Ui, content: &str, fill: egui::Color32, text: egui::Color32, max_width: f32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(BUBBLE_RADIUS)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.add(egui::Label::new(egui::RichText::new(content).color(text)).wrap());
        });
}
