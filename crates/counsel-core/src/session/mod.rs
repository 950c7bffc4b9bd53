//! Conversation session domain module.
//!
//! # Module Structure
//!
//! - `message`: Transcript entry types (`Turn`)
//! - `transcript`: The append-only turn record (`Transcript`)
//! - `model`: The session itself and its submit flow (`ChatSession`)

mod message;
mod model;
mod transcript;

// Re-export public API
pub use message::Turn;
pub use model::ChatSession;
pub use transcript::Transcript;
