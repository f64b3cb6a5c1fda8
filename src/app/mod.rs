//! Application module structure for ChatApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: ChatApp struct, initialization and teardown
//! - `events`: Event processing from backend
//! - `update`: Main update loop
//! - `ui::panels`: Central feed panel rendering
//! - `ui::input`: Composer panel

pub mod core;
pub mod events;
pub mod ui;
pub mod update;

// Re-export ChatApp for public API
pub use core::ChatApp;
