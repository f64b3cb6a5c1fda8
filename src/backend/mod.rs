/// Backend thread that owns the feed subscription and performs submits.
///
/// - `main_loop`: runtime setup, action polling and snapshot forwarding
/// - `main_loop::handlers`: per-action and per-snapshot handling
mod main_loop;

// Re-export the main backend entry points
pub use main_loop::{run_backend, RepaintFn};
