//! Message feed rendering for the central chat panel.

mod render;

// Re-export public API
pub use render::{render_messages, AVATAR_SIZE, BUBBLE_MAX_WIDTH_FRACTION};
