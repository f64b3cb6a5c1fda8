//! Core application state, separated from UI logic.
//!
//! `ClientState` holds the feed snapshot, the composer and transient status
//! lines. UI components receive it as a parameter rather than owning it.

use std::time::Instant;

use chrono::Local;

use crate::composer::{self, ComposerEvent, ComposerState};
use crate::feed::FeedState;
use crate::protocol::PostMessage;

#[derive(Debug, Default)]
pub struct ClientState {
    /// Latest feed snapshot.
    pub feed: FeedState,

    /// Composer fields. `composer.user` is also the viewer name.
    pub composer: ComposerState,

    /// Whether the feed stream has ended.
    pub feed_closed: bool,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl ClientState {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            composer: ComposerState::new(user),
            ..Self::default()
        }
    }

    pub fn viewer(&self) -> &str {
        &self.composer.user
    }

    /// Apply a composer event and return the message to submit, if any.
    pub fn apply_composer_event(&mut self, event: ComposerEvent) -> Option<PostMessage> {
        let current = std::mem::take(&mut self.composer);
        let transition = composer::update(current, event);
        self.composer = transition.state;
        transition.submit
    }

    /// Add a timestamped status line.
    pub fn push_status(&mut self, text: impl AsRef<str>) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.status_messages
            .push((format!("[{}] {}", ts, text.as_ref()), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_state_new() {
        let state = ClientState::new("Achyuth");
        assert_eq!(state.viewer(), "Achyuth");
        assert!(!state.feed.has_snapshot());
        assert!(!state.feed_closed);
        assert!(state.status_messages.is_empty());
    }

    #[test]
    fn test_viewer_follows_user_field() {
        let mut state = ClientState::new("Achyuth");
        state.apply_composer_event(ComposerEvent::UserEdited("Bob".into()));
        assert_eq!(state.viewer(), "Bob");
    }

    #[test]
    fn test_apply_send() {
        let mut state = ClientState::new("Achyuth");
        assert!(state
            .apply_composer_event(ComposerEvent::ContentEdited("hello".into()))
            .is_none());

        let post = state.apply_composer_event(ComposerEvent::SendClicked);
        assert_eq!(
            post,
            Some(PostMessage {
                user: "Achyuth".into(),
                content: "hello".into(),
            })
        );
        assert_eq!(state.composer.content, "");
    }

    #[test]
    fn test_status_lines_are_timestamped_and_purged() {
        let mut state = ClientState::new("Achyuth");
        state.push_status("Feed closed");
        assert_eq!(state.status_messages.len(), 1);
        assert!(state.status_messages[0].0.starts_with('['));
        assert!(state.status_messages[0].0.ends_with("Feed closed"));

        state.purge_old_status_messages(60);
        assert_eq!(state.status_messages.len(), 1);
        state.purge_old_status_messages(0);
        assert!(state.status_messages.is_empty());
    }
}
