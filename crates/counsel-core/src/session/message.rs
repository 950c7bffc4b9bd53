//! Conversation turn types.
//!
//! This module contains the transcript entry type. Turns come in pairs: a
//! user turn followed by the assistant turn that answered it.

use serde::{Deserialize, Serialize};

use crate::persona::PersonaKey;
use crate::provider::ChatMessage;

/// A single entry in the session transcript.
///
/// Assistant turns carry the persona that produced them, so a turn keeps its
/// original label even after the user switches to a different expert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Turn {
    /// Text the user submitted, recorded verbatim.
    User {
        text: String,
        /// Timestamp when the turn was recorded (ISO 8601 format).
        timestamp: String,
    },
    /// The model's reply.
    Assistant {
        text: String,
        /// The persona that was selected when this reply was produced.
        persona: PersonaKey,
        /// Timestamp when the turn was recorded (ISO 8601 format).
        timestamp: String,
    },
}

impl Turn {
    /// Creates a user turn stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Turn::User {
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates an assistant turn stamped with the current time.
    pub fn assistant(text: impl Into<String>, persona: PersonaKey) -> Self {
        Turn::Assistant {
            text: text.into(),
            persona,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The turn's text, regardless of who produced it.
    pub fn text(&self) -> &str {
        match self {
            Turn::User { text, .. } | Turn::Assistant { text, .. } => text,
        }
    }

    /// True for turns the user submitted.
    pub fn is_user(&self) -> bool {
        matches!(self, Turn::User { .. })
    }

    /// Maps the turn onto its provider wire message.
    pub(crate) fn to_chat_message(&self) -> ChatMessage {
        match self {
            Turn::User { text, .. } => ChatMessage::user(text),
            Turn::Assistant { text, .. } => ChatMessage::assistant(text),
        }
    }
}
