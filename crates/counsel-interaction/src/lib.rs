//! Collaborator implementations for the Counsel core.
//!
//! This crate holds everything that touches the outside world: the OpenAI
//! HTTP client behind the completion seam, the secret file store, and the
//! credential sources the resolution chain is built from.

pub mod credentials;
pub mod openai;
pub mod secret;

// Re-export public API
pub use credentials::{API_KEY_ENV, EnvSource, SecretFileSource, default_chain};
pub use openai::OpenAiChatClient;
pub use secret::{OpenAiConfig, SecretConfig, SecretStore, SecretStoreError};
