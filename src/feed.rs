//! Message feed view model.
//!
//! `FeedState` holds whatever the feed delivered last and nothing else:
//! every snapshot replaces the previous one wholesale. `layout_rows` turns
//! that snapshot into display rows for a given viewer.

use crate::protocol::{Message, MessageId};

/// Which side of the feed a message is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Sent by the viewer, drawn on the right
    Own,
    /// Sent by someone else, drawn on the left with an avatar label
    Other,
}

/// A message ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow<'a> {
    pub id: &'a MessageId,
    pub user: &'a str,
    pub content: &'a str,
    pub side: Side,
    /// Avatar text, present only for `Side::Other`
    pub label: Option<String>,
}

/// Latest snapshot received from the feed.
#[derive(Debug, Default, Clone)]
pub struct FeedState {
    snapshot: Option<Vec<Message>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed list with `messages`.
    pub fn apply_snapshot(&mut self, messages: Vec<Message>) {
        self.snapshot = Some(messages);
    }

    /// `None` until the first snapshot arrives.
    pub fn snapshot(&self) -> Option<&[Message]> {
        self.snapshot.as_deref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// First two characters of `name`, upper-cased.
pub fn avatar_label(name: &str) -> String {
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Lay out the current snapshot for `viewer`. Empty before the first snapshot.
pub fn layout_rows<'a>(viewer: &str, feed: &'a FeedState) -> Vec<FeedRow<'a>> {
    let Some(messages) = feed.snapshot() else {
        return Vec::new();
    };

    messages
        .iter()
        .map(|msg| {
            let side = if msg.user == viewer { Side::Own } else { Side::Other };
            FeedRow {
                id: &msg.id,
                user: &msg.user,
                content: &msg.content,
                side,
                label: (side == Side::Other).then(|| avatar_label(&msg.user)),
            }
        })
        .collect()
}
