pub mod credential;
pub mod error;
pub mod persona;
pub mod provider;
pub mod session;

// Re-export common error types
pub use error::{CompletionError, CounselError};
