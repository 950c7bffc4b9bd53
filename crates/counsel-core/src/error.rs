//! Error types for the Counsel application.

use thiserror::Error;

/// Errors raised by the completion boundary.
///
/// Each submission makes exactly one provider call, so these map one-to-one
/// onto the ways that call can go wrong: the request never completed, the
/// provider refused it, or the response was unusable.
#[derive(Error, Debug, Clone)]
pub enum CompletionError {
    /// The request never produced an HTTP response
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// The provider answered with a non-success status
    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// The response decoded, but carried no usable reply
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Provider error
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

/// A shared error type for the Counsel application.
///
/// This provides typed, structured error variants so callers can tell a
/// rejected submission (nothing was sent) from a failed completion call
/// (something was sent and came back in error).
#[derive(Error, Debug, Clone)]
pub enum CounselError {
    /// The submitted text was empty after trimming surrounding whitespace
    #[error("Validation error: message text is empty")]
    EmptyInput,

    /// No credential could be resolved from any configured source
    #[error("Configuration error: {message}")]
    MissingCredential { message: String },

    /// A persona name outside the built-in catalog was requested
    #[error("Unknown persona: '{0}'")]
    UnknownPersona(String),

    /// The provider call failed; the transcript was left unchanged
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

impl CounselError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MissingCredential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential {
            message: message.into(),
        }
    }

    /// Creates an UnknownPersona error
    pub fn unknown_persona(name: impl Into<String>) -> Self {
        Self::UnknownPersona(name.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation failure (input rejected before any call)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Check if this is a configuration failure (no credential available)
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential { .. })
    }

    /// Check if this is an unknown persona error
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, Self::UnknownPersona(_))
    }

    /// Check if this is a completion failure (the provider call itself)
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }
}

/// A type alias for `Result<T, CounselError>`.
pub type Result<T> = std::result::Result<T, CounselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_predicates_are_disjoint() {
        let errors = [
            CounselError::EmptyInput,
            CounselError::missing_credential("no key"),
            CounselError::unknown_persona("astrology"),
            CounselError::Completion(CompletionError::transport("connection refused")),
        ];

        for error in &errors {
            let hits = [
                error.is_validation(),
                error.is_configuration(),
                error.is_unknown_persona(),
                error.is_completion(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "{error} should match exactly one class");
        }
    }

    #[test]
    fn test_completion_error_converts_into_counsel_error() {
        let error: CounselError = CompletionError::provider(429, "rate limited").into();
        assert!(error.is_completion());
        assert!(
            error
                .to_string()
                .contains("Provider returned 429: rate limited")
        );
    }

    #[test]
    fn test_unknown_persona_names_the_rejected_input() {
        let error = CounselError::unknown_persona("astrology");
        assert_eq!(error.to_string(), "Unknown persona: 'astrology'");
    }
}
