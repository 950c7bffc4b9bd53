//! Persona domain model.
//!
//! Represents the expert personas a user can consult. The set is closed:
//! every selectable persona is a `PersonaKey` variant, and every variant has
//! a catalog entry, so selection can never reach an unmapped instruction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CounselError;

/// The fixed set of selectable expert personas.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKey {
    /// Legal expert
    Legal,
    /// Sports science expert
    Sports,
    /// Nutrition expert
    Nutrition,
    /// Medical doctor
    Medicine,
    /// Psychologist
    Psychology,
    /// IT engineer
    It,
}

impl PersonaKey {
    /// Every selectable key, in selector display order.
    pub const ALL: [PersonaKey; 6] = [
        PersonaKey::Legal,
        PersonaKey::Sports,
        PersonaKey::Nutrition,
        PersonaKey::Medicine,
        PersonaKey::Psychology,
        PersonaKey::It,
    ];

    /// Canonical lowercase name, used for selection and display.
    pub fn name(&self) -> &'static str {
        match self {
            PersonaKey::Legal => "legal",
            PersonaKey::Sports => "sports",
            PersonaKey::Nutrition => "nutrition",
            PersonaKey::Medicine => "medicine",
            PersonaKey::Psychology => "psychology",
            PersonaKey::It => "it",
        }
    }
}

impl fmt::Display for PersonaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonaKey {
    type Err = CounselError;

    /// Parses a persona name, case-insensitively.
    ///
    /// Anything outside the catalog is rejected with
    /// [`CounselError::UnknownPersona`]; there is no fallback persona.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PersonaKey::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| CounselError::unknown_persona(s.trim()))
    }
}

/// An expert persona: a display label plus the system instruction sent ahead
/// of the transcript on every completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Selector key for this persona
    pub key: PersonaKey,
    /// Human-readable label shown next to replies
    pub label: &'static str,
    /// System instruction establishing the expert's voice
    pub instruction: &'static str,
}
