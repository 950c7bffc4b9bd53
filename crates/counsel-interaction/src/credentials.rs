//! Credential sources backing the resolution chain.
//!
//! Resolution priority: ~/.config/counsel/secret.json > environment
//! variables. Each source reads its backing store on every call, so a key
//! added after startup is picked up on the next submission.

use std::env;

use counsel_core::credential::{ApiCredential, CredentialChain, CredentialSource};

use crate::secret::{SecretStore, SecretStoreError};

/// Environment variable consulted when the secret file has no key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Credential source backed by the secret file's `openai.api_key` entry.
pub struct SecretFileSource {
    store: SecretStore,
    description: String,
}

impl SecretFileSource {
    pub fn new(store: SecretStore) -> Self {
        let description = format!("secret file {}", store.path().display());
        Self { store, description }
    }
}

impl CredentialSource for SecretFileSource {
    fn describe(&self) -> &str {
        &self.description
    }

    fn resolve(&self) -> Option<ApiCredential> {
        let config = match self.store.load() {
            Ok(config) => config,
            Err(SecretStoreError::NotFound(_)) => return None,
            Err(err) => {
                // Unreadable or malformed files count as a miss; resolution
                // falls through to the next source
                tracing::debug!("secret file unavailable: {err}");
                return None;
            }
        };

        config
            .openai
            .map(|openai| ApiCredential::new(openai.api_key))
    }
}

/// Credential source backed by a process environment variable.
pub struct EnvSource {
    variable: String,
    description: String,
}

impl EnvSource {
    pub fn new(variable: impl Into<String>) -> Self {
        let variable = variable.into();
        let description = format!("environment variable {variable}");
        Self {
            variable,
            description,
        }
    }
}

impl CredentialSource for EnvSource {
    fn describe(&self) -> &str {
        &self.description
    }

    fn resolve(&self) -> Option<ApiCredential> {
        env::var(&self.variable).ok().map(ApiCredential::new)
    }
}

/// Builds the production resolution chain: the secret file first, then the
/// `OPENAI_API_KEY` environment variable.
pub fn default_chain() -> Result<CredentialChain, SecretStoreError> {
    let store = SecretStore::new()?;
    Ok(CredentialChain::new(vec![
        Box::new(SecretFileSource::new(store)),
        Box::new(EnvSource::new(API_KEY_ENV)),
    ]))
}
