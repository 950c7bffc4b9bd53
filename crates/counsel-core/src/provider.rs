//! The completion provider seam.
//!
//! The session speaks to the hosted model through [`CompletionProvider`];
//! the concrete HTTP client lives in the interaction crate. Keeping the
//! trait here lets session behavior be tested against scripted providers
//! without any network machinery.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::credential::ApiCredential;
use crate::error::CompletionError;

/// Model identifier used unless the secret file overrides it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature applied to every completion request.
pub const TEMPERATURE: f32 = 0.5;

/// Role of a message on the provider wire.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Persona instruction, always first in the sequence
    System,
    /// Text the user submitted
    User,
    /// A reply the model produced earlier in the session
    Assistant,
}

/// A single message in the sequence sent to the provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Everything one completion call needs.
///
/// Built fresh per submission and handed to the provider whole; nothing in
/// it is retained afterwards, including the credential.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub credential: ApiCredential,
    /// Full message sequence: instruction, transcript replay, new message
    pub messages: Vec<ChatMessage>,
}

/// A hosted chat completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one message sequence and returns the reply text.
    ///
    /// One request, one response. Implementations do not retry and do not
    /// stream; a failure is reported as a [`CompletionError`] and the caller
    /// decides what to do next.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_serialize_lowercase() {
        let message = ChatMessage::system("You are an expert.");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"role": "system", "content": "You are an expert."})
        );
    }

    #[test]
    fn test_constructors_set_the_matching_role() {
        assert_eq!(ChatMessage::user("hi").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("hello").role, ChatRole::Assistant);
        assert_eq!(ChatMessage::system("rules").role, ChatRole::System);
    }

    #[test]
    fn test_request_debug_does_not_reveal_the_credential() {
        let request = CompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            credential: ApiCredential::new("sk-very-secret"),
            messages: vec![ChatMessage::user("hello")],
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("sk-very-secret"));
    }
}
