//! Derivation engine for Heldenblatt.
//!
//! Maps raw character entries to derived values: ability modifiers, the
//! level-based proficiency bonus, and final skill modifiers. A
//! [`CharacterInput`] is validated and turned into a [`CharacterRecord`],
//! the value object consumed by the sheet exporter.

pub mod ability;
pub mod error;
pub mod input;
pub mod proficiency;
pub mod record;
pub mod skill;
pub mod validate;

pub use ability::{Ability, AbilityScores, ability_modifier};
pub use error::{MechError, MechResult, ValidationErrors};
pub use input::{CharacterInput, SkillSetting};
pub use proficiency::{Proficiency, final_skill_modifier, proficiency_bonus};
pub use record::{CharacterRecord, SkillScore, present_entries};
pub use skill::Skill;
pub use validate::{ValidationIssue, validate_input};

/// Format a modifier with an explicit sign (`+2`, `+0`, `-1`).
pub fn signed(value: i32) -> String {
    format!("{value:+}")
}
