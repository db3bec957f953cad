//! Single-slot status banner.
//!
//! A new message always replaces the current one. Every `show` hands back a
//! generation number; the timer that later asks to hide the banner passes it
//! back, and the request is ignored unless it still names the message on
//! screen. That is what lets a newer message restart the display window.

use crate::api::{MessageResponse, Mutation};
use crate::error::ClientResult;

/// Default time a message stays visible.
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the banner.
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl TransientMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// Banner for the result of a signup or unregister call.
    pub fn from_outcome(mutation: Mutation, outcome: &ClientResult<MessageResponse>) -> Self {
        match outcome {
            Ok(response) => Self::success(response.message.clone()),
            Err(err) => Self::error(err.user_message(mutation)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot {
    current: Option<TransientMessage>,
    visible: bool,
    generation: u64,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and return the generation to hide it with.
    pub fn show(&mut self, message: TransientMessage) -> u64 {
        self.generation += 1;
        self.current = Some(message);
        self.visible = true;
        self.generation
    }

    /// Hide the banner if `generation` still names the latest message.
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The last message shown. Text stays after hiding, only visibility
    /// changes.
    pub fn message(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }

    /// Class attribute for the banner element.
    pub fn class(&self) -> String {
        let kind = self.current.as_ref().map(|m| m.kind.class()).unwrap_or("");
        if self.is_visible() {
            kind.to_string()
        } else if kind.is_empty() {
            "hidden".to_string()
        } else {
            format!("{} hidden", kind)
        }
    }
}
