// src/persona/mod.rs
// Expert personas and their system instructions

pub mod prompts;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use prompts::DEFAULT_INSTRUCTION;

/// The fixed set of experts a user can consult
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    Medical,
    Programming,
    Cooking,
    Business,
    Education,
}

impl Persona {
    /// Human-readable label shown in the selector, also the lookup key
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Medical => "medical expert",
            Persona::Programming => "programming expert",
            Persona::Cooking => "cooking expert",
            Persona::Business => "business expert",
            Persona::Education => "education expert",
        }
    }

    /// Stable identifier used in JSON payloads
    pub fn id(&self) -> &'static str {
        match self {
            Persona::Medical => "medical",
            Persona::Programming => "programming",
            Persona::Cooking => "cooking",
            Persona::Business => "business",
            Persona::Education => "education",
        }
    }

    /// Returns the system instruction for this persona.
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Medical => prompts::MEDICAL_PROMPT,
            Persona::Programming => prompts::PROGRAMMING_PROMPT,
            Persona::Cooking => prompts::COOKING_PROMPT,
            Persona::Business => prompts::BUSINESS_PROMPT,
            Persona::Education => prompts::EDUCATION_PROMPT,
        }
    }

    /// All personas in selector order; the first one is the default choice.
    pub fn all() -> &'static [Persona] {
        &[
            Persona::Medical,
            Persona::Programming,
            Persona::Cooking,
            Persona::Business,
            Persona::Education,
        ]
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Persona {
    type Err = ();

    /// Accepts the label ("medical expert"), its snake_case form
    /// ("medical_expert") or the short id ("medical"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Persona::all()
            .iter()
            .copied()
            .find(|p| {
                key == p.label() || key == p.label().replace(' ', "_") || key == p.id()
            })
            .ok_or(())
    }
}

/// Resolve a label to its system instruction.
///
/// Total: anything that is not a known persona gets [`DEFAULT_INSTRUCTION`].
pub fn resolve_instruction(label: &str) -> &'static str {
    label
        .parse::<Persona>()
        .map(|p| p.instruction())
        .unwrap_or(DEFAULT_INSTRUCTION)
}
