//! Diagnostic logging setup.
//!
//! Defaults to INFO for this crate and WARN for everything else. Override
//! with the RUST_LOG environment variable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_FILTER: &str = "chatroom_client=info,warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_filter(env_filter()))
        .try_init();
}
