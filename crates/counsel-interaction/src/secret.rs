//! Secret configuration file storage.
//!
//! Provides read-only loading of `~/.config/counsel/secret.json`, the
//! managed store consulted ahead of the process environment when resolving
//! an API key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the secret file.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    /// Secret file not found
    #[error("Secret file not found at: {0}")]
    NotFound(PathBuf),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    ConfigDirNotFound,
}

/// Root structure of secret.json.
///
/// Deliberately carries no `Debug` implementation so key material cannot
/// end up in logs by way of a formatting shortcut.
#[derive(Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
}

/// OpenAI section of secret.json.
#[derive(Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Storage for the secret configuration file (secret.json).
///
/// Responsibilities:
/// - Load secret.json from ~/.config/counsel/
/// - Parse JSON into the SecretConfig model
/// - Report missing or invalid files as typed errors
///
/// Does NOT:
/// - Write or modify secret files (read-only)
/// - Validate API keys or credentials
/// - Handle encryption (plaintext JSON storage)
///
/// # Security Note
///
/// This storage reads plaintext JSON files. The secret.json file should have
/// appropriate file permissions (e.g., 600) to prevent unauthorized access.
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    /// Creates a store over the default path (~/.config/counsel/secret.json).
    ///
    /// Fails only when the home directory cannot be determined.
    pub fn new() -> Result<Self, SecretStoreError> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a store over a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    ///
    /// # Errors
    ///
    /// - [`SecretStoreError::NotFound`]: file doesn't exist
    /// - [`SecretStoreError::Io`]: failed to read the file
    /// - [`SecretStoreError::Parse`]: invalid JSON
    pub fn load(&self) -> Result<SecretConfig, SecretStoreError> {
        if !self.path.exists() {
            return Err(SecretStoreError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path to the secret file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the default path: ~/.config/counsel/secret.json
    fn default_path() -> Result<PathBuf, SecretStoreError> {
        let home = dirs::home_dir().ok_or(SecretStoreError::ConfigDirNotFound)?;
        Ok(home.join(".config").join("counsel").join("secret.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        let store = SecretStore::with_path(file_path.clone());

        let result = store.load();
        assert!(result.is_err());
        match result {
            Err(SecretStoreError::NotFound(path)) => {
                assert_eq!(path, file_path);
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{
            "openai": {
                "api_key": "test-key-123",
                "model_name": "gpt-4o"
            }
        }"#;

        fs::write(&file_path, json_content).unwrap();

        let store = SecretStore::with_path(file_path);
        let config = store.load().unwrap();

        assert!(config.openai.is_some());
        let openai = config.openai.unwrap();
        assert_eq!(openai.api_key, "test-key-123");
        assert_eq!(openai.model_name, Some("gpt-4o".to_string()));
    }

    #[test]
    fn test_load_config_without_model_name() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{"openai": {"api_key": "test-key-123"}}"#;
        fs::write(&file_path, json_content).unwrap();

        let store = SecretStore::with_path(file_path);
        let config = store.load().unwrap();

        let openai = config.openai.unwrap();
        assert_eq!(openai.api_key, "test-key-123");
        assert_eq!(openai.model_name, None);
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{}"#;
        fs::write(&file_path, json_content).unwrap();

        let store = SecretStore::with_path(file_path);
        let config = store.load().unwrap();

        assert!(config.openai.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let invalid_json = r#"{ invalid json"#;
        fs::write(&file_path, invalid_json).unwrap();

        let store = SecretStore::with_path(file_path);
        let result = store.load();

        assert!(result.is_err());
        assert!(matches!(result, Err(SecretStoreError::Parse(_))));
    }
}
