//! Chatroom client - a live chat view built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime that owns the feed subscription
//! - Communication via crossbeam channels (lock-free, sync-safe)

use std::sync::Arc;

use eframe::egui;
use tracing::info;

use chatroom_client::app::ChatApp;
use chatroom_client::protocol::Message;
use chatroom_client::service::{LoopbackService, Services};
use chatroom_client::{config, logging};

fn main() -> eframe::Result<()> {
    logging::init();

    let settings = config::load_settings();
    info!(user = %settings.user, theme = %settings.theme, "starting chatroom client");

    // Offline collaborator until a remote client is plugged in
    let service = Arc::new(LoopbackService::with_messages(vec![Message::new(
        1,
        "Bot",
        "Welcome! Type a message below and press Enter.",
    )]));
    let services = Services::loopback(service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chat",
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, settings, services)))),
    )
}
