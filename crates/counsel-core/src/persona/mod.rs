//! Persona domain module.
//!
//! This module contains the expert persona model and the built-in catalog.
//!
//! # Module Structure
//!
//! - `model`: Core persona types (`Persona`, `PersonaKey`)
//! - `catalog`: The six built-in experts and catalog lookups

mod catalog;
mod model;

// Re-export public API
pub use catalog::{catalog, instruction_for, persona_for};
pub use model::{Persona, PersonaKey};
