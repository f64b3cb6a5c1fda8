//! Avatar rendering.

use eframe::egui;

use super::ChatTheme;

/// Border width of the avatar ring.
const AVATAR_BORDER: f32 = 2.0;
/// 18pt
const AVATAR_FONT_SIZE: f32 = 24.0;

/// Render a circular avatar showing `label` (usually two letters).
///
/// Returns the response for the avatar widget (for hover handling).
pub fn render_avatar(ui: &mut egui::Ui, label: &str, size: f32, theme: &ChatTheme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = size / 2.0 - AVATAR_BORDER / 2.0;
        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(AVATAR_BORDER, theme.avatar_border),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(AVATAR_FONT_SIZE.min(size * 0.5)),
            theme.avatar_text,
        );
    }

    response
}
