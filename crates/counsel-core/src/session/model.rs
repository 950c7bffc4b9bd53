//! The conversation session and its submit operation.
//!
//! A session owns the transcript, the current persona selection, and the
//! one operation that changes either: [`ChatSession::submit`]. Collaborators
//! (the completion provider, the credential chain) are injected at
//! construction, which keeps the whole flow testable with scripted doubles.

use std::sync::Arc;

use crate::credential::CredentialChain;
use crate::error::{CounselError, Result};
use crate::persona::{self, PersonaKey};
use crate::provider::{
    ChatMessage, CompletionProvider, CompletionRequest, DEFAULT_MODEL, TEMPERATURE,
};

use super::message::Turn;
use super::transcript::Transcript;

/// A single user's conversation with the expert catalog.
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    created_at: String,
    /// The persona the next submission will consult
    persona: PersonaKey,
    transcript: Transcript,
    /// Model identifier sent with every request
    model: String,
    provider: Arc<dyn CompletionProvider>,
    credentials: CredentialChain,
}

impl ChatSession {
    /// Creates a session with an empty transcript.
    pub fn new(
        persona: PersonaKey,
        provider: Arc<dyn CompletionProvider>,
        credentials: CredentialChain,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            persona,
            transcript: Transcript::new(),
            model: DEFAULT_MODEL.to_string(),
            provider,
            credentials,
        }
    }

    /// Replaces the model identifier for all subsequent submissions.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The currently selected persona.
    pub fn persona(&self) -> PersonaKey {
        self.persona
    }

    /// Selects a different persona for subsequent submissions.
    ///
    /// Recorded turns are unaffected; each assistant turn keeps the persona
    /// it was produced under.
    pub fn select_persona(&mut self, persona: PersonaKey) {
        self.persona = persona;
    }

    /// The transcript so far, oldest turn first.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The model identifier submissions are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submits one user message to `persona` and returns the reply text.
    ///
    /// The full flow, in order: select the persona, validate the text,
    /// resolve a credential, replay the transcript to the provider with the
    /// persona instruction in front and the new message at the end, then
    /// record the exchange.
    ///
    /// The transcript changes only when every step succeeds, and then by
    /// exactly one user/assistant pair. Any error leaves it untouched, so
    /// the user can fix the problem and resubmit without losing history.
    ///
    /// # Arguments
    ///
    /// * `user_text` - The message to send, recorded verbatim on success
    /// * `persona` - The expert to consult; becomes the current selection
    ///
    /// # Errors
    ///
    /// * [`CounselError::EmptyInput`] if the text is empty after trimming
    /// * [`CounselError::MissingCredential`] if no source yields a credential
    /// * [`CounselError::Completion`] if the provider call fails
    pub async fn submit(&mut self, user_text: &str, persona: PersonaKey) -> Result<String> {
        self.persona = persona;

        if user_text.trim().is_empty() {
            return Err(CounselError::EmptyInput);
        }

        let credential = self
            .credentials
            .resolve()
            .ok_or_else(|| self.missing_credential_error())?;

        let request = CompletionRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            credential,
            messages: self.build_messages(persona, user_text),
        };

        let reply = self.provider.complete(request).await?;

        self.transcript.record_exchange(
            Turn::user(user_text),
            Turn::assistant(reply.clone(), persona),
        );

        Ok(reply)
    }

    /// Builds the wire sequence: instruction, full transcript, new message.
    fn build_messages(&self, persona: PersonaKey, user_text: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.transcript.len() + 2);
        messages.push(ChatMessage::system(persona::instruction_for(persona)));
        messages.extend(self.transcript.turns().iter().map(Turn::to_chat_message));
        messages.push(ChatMessage::user(user_text));
        messages
    }

    fn missing_credential_error(&self) -> CounselError {
        CounselError::missing_credential(format!(
            "No API key is configured. Checked: {}. Add one and submit again.",
            self.credentials.describe_sources().join(", ")
        ))
    }
}
