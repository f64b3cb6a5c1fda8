//! Composer state and its transitions.
//!
//! The composer never mutates in place: every event produces a new
//! `ComposerState`, plus the message to submit when a send goes through.

use crate::protocol::PostMessage;

/// Initial user name when nothing else is configured.
pub const DEFAULT_USER: &str = "Achyuth";

/// The two input fields of the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    pub user: String,
    /// Current draft
    pub content: String,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(DEFAULT_USER)
    }
}

impl ComposerState {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            content: String::new(),
        }
    }

    pub fn with_user(self, user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..self
        }
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }

    /// Attempt a send. The draft is always cleared; a message is produced
    /// only when the draft was non-empty.
    pub fn send(self) -> (Self, Option<PostMessage>) {
        let post = (!self.content.is_empty()).then(|| PostMessage {
            user: self.user.clone(),
            content: self.content,
        });
        (
            Self {
                user: self.user,
                content: String::new(),
            },
            post,
        )
    }
}

/// Input events produced by the composer widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    UserEdited(String),
    ContentEdited(String),
    SendClicked,
    /// Enter pressed while the content field had focus
    EnterPressed,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ComposerState,
    pub submit: Option<PostMessage>,
}

pub fn update(state: ComposerState, event: ComposerEvent) -> Transition {
    match event {
        ComposerEvent::UserEdited(user) => Transition {
            state: state.with_user(user),
            submit: None,
        },
        ComposerEvent::ContentEdited(content) => Transition {
            state: state.with_content(content),
            submit: None,
        },
        ComposerEvent::SendClicked | ComposerEvent::EnterPressed => {
            let (state, submit) = state.send();
            Transition { state, submit }
        }
    }
}
