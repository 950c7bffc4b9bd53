//! OpenAiChatClient - Direct REST implementation for the OpenAI Chat
//! Completions API.
//!
//! This client calls the API directly over HTTPS and implements the core
//! [`CompletionProvider`] seam. Each submission is exactly one request with
//! no retry on failure; the credential arrives with the request and is not
//! retained.

use async_trait::async_trait;
use counsel_core::error::CompletionError;
use counsel_core::provider::{ChatMessage, CompletionProvider, CompletionRequest};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Provider implementation that talks to the OpenAI HTTP API.
#[derive(Clone, Default)]
pub struct OpenAiChatClient {
    client: Client,
    base_url: Option<String>,
}

impl OpenAiChatClient {
    /// Creates a client against the public OpenAI endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at a different chat-completions URL.
    ///
    /// Used by tests to target a local stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(BASE_URL)
    }

    async fn send_request(
        &self,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {api_key}"))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| CompletionError::transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::malformed(err.to_string()))?;

        extract_reply(parsed)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: request.model,
            temperature: request.temperature,
            messages: request.messages,
        };

        tracing::debug!(
            model = %body.model,
            messages = body.messages.len(),
            "sending completion request"
        );

        let reply = self
            .send_request(request.credential.expose(), &body)
            .await?;

        tracing::debug!(chars = reply.len(), "received completion reply");
        Ok(reply)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_reply(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::malformed("response contained no message content"))
}

fn map_http_error(status: StatusCode, body: String) -> CompletionError {
    // Prefer the structured error envelope; fall back to the raw body
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(wrapper) => wrapper.error.message,
        Err(_) => body,
    };

    CompletionError::provider(status.as_u16(), message)
}
