//! Chatroom client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod composer;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod logging;
pub mod protocol;
pub mod service;
pub mod state;
pub mod ui;

#[cfg(test)]
mod backend_tests;
