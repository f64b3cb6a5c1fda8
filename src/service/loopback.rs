//! In-process stand-in for the remote chat server.
//!
//! Keeps the message list in memory and republishes the whole list to every
//! subscriber after each post. Nothing is written to disk.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::StreamExt;
use tokio::sync::watch;
use tracing::debug;

use super::{FeedSubscriber, MessagePoster, SnapshotStream};
use crate::error::ServiceError;
use crate::protocol::{Message, PostMessage};

pub struct LoopbackService {
    tx: watch::Sender<Vec<Message>>,
    next_id: AtomicU64,
}

impl Default for LoopbackService {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopbackService {
    pub fn new() -> Self {
        Self::with_messages(Vec::new())
    }

    /// Start with `messages` already in the feed. Ids for later posts
    /// continue after the seeded count.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let next_id = messages.len() as u64 + 1;
        let (tx, _rx) = watch::channel(messages);
        Self {
            tx,
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Current message list.
    pub fn messages(&self) -> Vec<Message> {
        self.tx.borrow().clone()
    }
}

impl FeedSubscriber for LoopbackService {
    fn subscribe(&self) -> SnapshotStream {
        let rx = self.tx.subscribe();
        // First item is the current list; later items follow each change.
        futures::stream::unfold((rx, true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let snapshot = rx.borrow_and_update().clone();
            Some((snapshot, (rx, false)))
        })
        .boxed()
    }
}

#[async_trait::async_trait]
impl MessagePoster for LoopbackService {
    async fn post_message(&self, message: PostMessage) -> Result<(), ServiceError> {
        if message.user.is_empty() {
            return Err(ServiceError::Rejected("user is empty".into()));
        }
        if message.content.is_empty() {
            return Err(ServiceError::Rejected("content is empty".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, user = %message.user, "loopback accepted message");
        self.tx.send_modify(|messages| {
            messages.push(Message::new(id, message.user, message.content));
        });
        Ok(())
    }
}
