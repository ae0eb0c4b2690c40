//! Skill proficiency levels and their display percentages.

use serde::{Deserialize, Serialize};

/// Proficiency level attached to a CV skill.
///
/// The four named levels come from the editing form. `Other` keeps any value a
/// caller constructed programmatically so the percentage mapping stays total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Basico,
    #[default]
    Intermedio,
    Avanzado,
    Experto,
    Other(String),
}

/// Percentage used for any level outside the four named ones.
pub const FALLBACK_PERCENTAGE: u8 = 50;

impl SkillLevel {
    /// Label shown next to the skill name.
    pub fn label(&self) -> &str {
        match self {
            SkillLevel::Basico => "Básico",
            SkillLevel::Intermedio => "Intermedio",
            SkillLevel::Avanzado => "Avanzado",
            SkillLevel::Experto => "Experto",
            SkillLevel::Other(raw) => raw,
        }
    }

    /// Display percentage: 25 / 50 / 75 / 100, or 50 for unrecognised levels.
    pub fn percentage(&self) -> u8 {
        match self {
            SkillLevel::Basico => 25,
            SkillLevel::Intermedio => 50,
            SkillLevel::Avanzado => 75,
            SkillLevel::Experto => 100,
            SkillLevel::Other(_) => FALLBACK_PERCENTAGE,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Básico" => SkillLevel::Basico,
            "Intermedio" => SkillLevel::Intermedio,
            "Avanzado" => SkillLevel::Avanzado,
            "Experto" => SkillLevel::Experto,
            _ => SkillLevel::Other(raw),
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(raw: &str) -> Self {
        SkillLevel::from(raw.to_string())
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Other(raw) => raw,
            named => named.label().to_string(),
        }
    }
}
