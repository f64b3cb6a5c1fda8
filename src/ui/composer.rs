//! Composer widgets: user field, content field and Send button.
//!
//! The widgets edit local copies and report what happened as
//! `ComposerEvent`s. The caller owns the state transition.

use eframe::egui;

use crate::composer::{ComposerEvent, ComposerState};

/// Share of the row given to the user field (the content field takes the
/// middle, the button the rest).
const USER_FIELD_FRACTION: f32 = 2.0 / 12.0;
const BUTTON_FRACTION: f32 = 2.0 / 12.0;

/// Render the composer row and return the events it produced this frame,
/// in the order they happened.
pub fn render_composer(ui: &mut egui::Ui, state: &ComposerState) -> Vec<ComposerEvent> {
    let mut user = state.user.clone();
    let mut content = state.content.clone();
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let total = ui.available_width();
        let user_width = total * USER_FIELD_FRACTION - spacing;
        let button_width = total * BUTTON_FRACTION - spacing;
        let content_width = total - user_width - button_width - 2.0 * spacing;

        let user_response = ui.add(
            egui::TextEdit::singleline(&mut user)
                .desired_width(user_width)
                .hint_text("User"),
        );
        if user_response.changed() {
            events.push(ComposerEvent::UserEdited(user.clone()));
        }

        let content_response = ui.add(
            egui::TextEdit::singleline(&mut content)
                .desired_width(content_width)
                .hint_text("Content"),
        );
        if content_response.changed() {
            events.push(ComposerEvent::ContentEdited(content.clone()));
        }

        let enter_pressed =
            content_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let send_clicked = ui
            .add_sized([button_width, content_response.rect.height()], egui::Button::new("Send"))
            .clicked();

        if enter_pressed {
            events.push(ComposerEvent::EnterPressed);
            content_response.request_focus();
        } else if send_clicked {
            events.push(ComposerEvent::SendClicked);
        }
    });

    events
}
