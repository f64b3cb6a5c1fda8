//! Colors and styling for the chat window.
//!
//! Bubble colors are fixed across themes: own messages are white on blue,
//! everyone else's are black on red. Only the surfaces change between the
//! light and dark variants.

pub mod widgets;

use eframe::egui::{self, Color32};

pub use widgets::render_avatar;

#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    /// [0] window background, [1] composer panel background
    pub surface: [Color32; 2],
    pub own_bubble: Color32,
    pub own_text: Color32,
    pub other_bubble: Color32,
    pub other_text: Color32,
    pub avatar_border: Color32,
    pub avatar_text: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
    pub warning: Color32,
}

impl ChatTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [Color32::WHITE, Color32::from_rgb(245, 246, 248)],
            own_bubble: Color32::BLUE,
            own_text: Color32::WHITE,
            other_bubble: Color32::RED,
            other_text: Color32::BLACK,
            avatar_border: Color32::from_rgb(0xe5, 0xe6, 0xea),
            avatar_text: Color32::from_rgb(33, 37, 41),
            text_muted: Color32::from_rgb(108, 117, 125),
            border_medium: Color32::from_rgb(0xe5, 0xe6, 0xea),
            warning: Color32::from_rgb(196, 120, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [Color32::from_rgb(28, 28, 38), Color32::from_rgb(19, 19, 26)],
            avatar_text: Color32::from_rgb(220, 221, 222),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_medium: Color32::from_rgb(47, 49, 54),
            warning: Color32::from_rgb(250, 166, 26),
            ..Self::light()
        }
    }

    /// Pick a theme by its settings name; unknown names get the light theme.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}

/// Apply egui visuals matching `theme`.
pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = theme.surface[0];
    ctx.set_visuals(visuals);
}
