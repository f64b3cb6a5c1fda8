//! External collaborators: the message feed and the submit operation.
//!
//! The view never reaches for a shared client. The backend is handed a
//! [`Services`] bundle and talks to whatever implements these traits.

pub mod loopback;

use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;

use crate::error::ServiceError;
use crate::protocol::{Message, PostMessage};

pub use loopback::LoopbackService;

/// Push-based sequence of feed snapshots. Dropping it unsubscribes.
pub type SnapshotStream = Pin<Box<dyn Stream<Item = Vec<Message>> + Send>>;

/// Source of feed snapshots.
pub trait FeedSubscriber: Send + Sync {
    /// Open a subscription. Each item is the complete current message list.
    fn subscribe(&self) -> SnapshotStream;
}

/// Sink for new messages.
#[async_trait::async_trait]
pub trait MessagePoster: Send + Sync {
    /// Submit a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator refuses or cannot be reached.
    async fn post_message(&self, message: PostMessage) -> Result<(), ServiceError>;
}

/// Capabilities injected into the backend.
#[derive(Clone)]
pub struct Services {
    pub feed: Arc<dyn FeedSubscriber>,
    pub poster: Arc<dyn MessagePoster>,
}

impl Services {
    pub fn new(feed: Arc<dyn FeedSubscriber>, poster: Arc<dyn MessagePoster>) -> Self {
        Self { feed, poster }
    }

    /// Use one loopback instance for both capabilities.
    pub fn loopback(service: Arc<LoopbackService>) -> Self {
        Self {
            feed: service.clone(),
            poster: service,
        }
    }
}
