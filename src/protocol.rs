use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque message identifier assigned by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chat message as delivered by the feed. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user: String,
    pub content: String,
}

impl Message {
    pub fn new(id: impl ToString, user: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: MessageId(id.to_string()),
            user: user.into(),
            content: content.into(),
        }
    }
}

/// Payload of the submit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessage {
    pub user: String,
    pub content: String,
}

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Submit a message (fire-and-forget)
    PostMessage(PostMessage),
    /// Drop the feed subscription and stop the backend thread
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The complete current message list
    Snapshot(Vec<Message>),
    /// The feed stream ended; no more snapshots will arrive
    FeedClosed,
    /// A submit call failed after the draft was already cleared
    SubmitFailed { content: String, reason: String },
    /// Backend-level failure
    Error(String),
}
