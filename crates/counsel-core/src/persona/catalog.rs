//! The built-in expert catalog.
//!
//! Six system-defined personas, fixed at compile time. Each instruction is
//! the system message that opens every completion request made while that
//! persona is selected.

use super::model::{Persona, PersonaKey};

/// Legal: explains matters from a legal standpoint.
pub static LEGAL_PERSONA: Persona = Persona {
    key: PersonaKey::Legal,
    label: "Legal",
    instruction: "You are a distinguished legal expert. Explain matters accurately and clearly from a legal point of view.",
};

/// Sports: answers grounded in sports science.
pub static SPORTS_PERSONA: Persona = Persona {
    key: PersonaKey::Sports,
    label: "Sports",
    instruction: "You are a sports science expert. Answer with grounding in exercise physiology and training theory.",
};

/// Nutrition: answers from a dietary and nutritional standpoint.
pub static NUTRITION_PERSONA: Persona = Persona {
    key: PersonaKey::Nutrition,
    label: "Nutrition",
    instruction: "You are a nutrition expert. Answer scientifically from a dietary and nutritional point of view.",
};

/// Medicine: answers grounded in medical evidence.
pub static MEDICINE_PERSONA: Persona = Persona {
    key: PersonaKey::Medicine,
    label: "Medicine",
    instruction: "You are a medical doctor. Answer with professional rigor, grounded in medical evidence.",
};

/// Psychology: explains through psychological theory.
pub static PSYCHOLOGY_PERSONA: Persona = Persona {
    key: PersonaKey::Psychology,
    label: "Psychology",
    instruction: "You are a psychologist. Explain things clearly, grounded in psychological theory.",
};

/// IT: answers from a technical engineering standpoint.
pub static IT_PERSONA: Persona = Persona {
    key: PersonaKey::It,
    label: "IT",
    instruction: "You are an IT engineer. Answer thoroughly from a technical point of view.",
};

/// Returns the catalog entry for `key`.
///
/// Total over `PersonaKey`, so a selected persona always has an instruction.
pub fn persona_for(key: PersonaKey) -> &'static Persona {
    match key {
        PersonaKey::Legal => &LEGAL_PERSONA,
        PersonaKey::Sports => &SPORTS_PERSONA,
        PersonaKey::Nutrition => &NUTRITION_PERSONA,
        PersonaKey::Medicine => &MEDICINE_PERSONA,
        PersonaKey::Psychology => &PSYCHOLOGY_PERSONA,
        PersonaKey::It => &IT_PERSONA,
    }
}

/// Returns the system instruction for `key`.
pub fn instruction_for(key: PersonaKey) -> &'static str {
    persona_for(key).instruction
}

/// Returns the full catalog, in selector order.
pub fn catalog() -> [&'static Persona; 6] {
    PersonaKey::ALL.map(persona_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_key_resolves_to_its_own_entry() {
        for key in PersonaKey::ALL {
            assert_eq!(persona_for(key).key, key);
        }
    }

    #[test]
    fn test_instructions_are_distinct_and_non_empty() {
        let instructions: HashSet<&str> = PersonaKey::ALL
            .iter()
            .map(|key| instruction_for(*key))
            .collect();
        assert_eq!(instructions.len(), PersonaKey::ALL.len());
        assert!(instructions.iter().all(|text| !text.is_empty()));
    }

    #[test]
    fn test_catalog_preserves_selector_order() {
        let keys: Vec<PersonaKey> = catalog().iter().map(|persona| persona.key).collect();
        assert_eq!(keys, PersonaKey::ALL.to_vec());
    }
}
