//! UI rendering modules for the chat client.
//!
//! This module contains all egui-based rendering code, organized by component:
//! - `messages`: Message feed rendering
//! - `composer`: User/content fields and the Send button
//! - `toasts`: Floating status lines
//! - `theme`: Color schemes and the avatar widget

pub mod composer;
pub mod messages;
pub mod theme;
pub mod toasts;

pub use composer::render_composer;
pub use messages::render_messages;
pub use theme::{apply_app_style, ChatTheme};
pub use toasts::render_status_toasts;
