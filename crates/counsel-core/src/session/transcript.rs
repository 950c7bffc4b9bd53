//! The append-only transcript.

use serde::{Deserialize, Serialize};

use super::message::Turn;

/// The ordered record of every exchange in a session.
///
/// Turns are only ever appended, and only as a completed user/assistant
/// pair. Nothing mutates or removes an entry once it is in, which is what
/// makes full-history replay safe to build from a borrow of the turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed exchange, user turn first.
    pub fn record_exchange(&mut self, user: Turn, assistant: Turn) {
        self.turns.push(user);
        self.turns.push(assistant);
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True while no exchange has completed.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaKey;

    #[test]
    fn test_starts_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_records_exchanges_in_submission_order() {
        let mut transcript = Transcript::new();
        transcript.record_exchange(
            Turn::user("first question"),
            Turn::assistant("first answer", PersonaKey::Legal),
        );
        transcript.record_exchange(
            Turn::user("second question"),
            Turn::assistant("second answer", PersonaKey::It),
        );

        let texts: Vec<&str> = transcript.turns().iter().map(Turn::text).collect();
        assert_eq!(
            texts,
            vec![
                "first question",
                "first answer",
                "second question",
                "second answer"
            ]
        );
    }

    #[test]
    fn test_exchanges_alternate_user_then_assistant() {
        let mut transcript = Transcript::new();
        transcript.record_exchange(
            Turn::user("question"),
            Turn::assistant("answer", PersonaKey::Medicine),
        );

        assert!(transcript.turns()[0].is_user());
        assert!(!transcript.turns()[1].is_user());
    }
}
