//! Credential resolution.
//!
//! A submission needs a provider credential, resolved fresh on every call
//! from an ordered list of sources. Sources are consulted front to back and
//! the first hit wins; nothing is cached between submissions, so fixing a
//! missing key takes effect on the next attempt.

use std::fmt;

/// An opaque provider credential.
///
/// The value is unreadable through `Debug`, so credentials cannot leak into
/// logs or error messages. Only the request builder reads it, via
/// [`ApiCredential::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Wraps a raw credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the secret for constructing the provider request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}

/// A single place a credential may come from.
pub trait CredentialSource: Send + Sync {
    /// Human-readable location of this source, for diagnostics and error
    /// messages. Never includes the secret itself.
    fn describe(&self) -> &str;

    /// Returns the credential if this source currently has one.
    fn resolve(&self) -> Option<ApiCredential>;
}

/// An ordered list of credential sources.
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    /// Creates a chain that consults `sources` in the order given.
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// Resolves the first available credential, or `None` when every source
    /// comes up empty.
    pub fn resolve(&self) -> Option<ApiCredential> {
        self.sources.iter().find_map(|source| source.resolve())
    }

    /// Describes each source in consultation order, for the error shown when
    /// resolution fails.
    pub fn describe_sources(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.describe()).collect()
    }
}
