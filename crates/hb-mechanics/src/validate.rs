//! Validation of character entries.
//!
//! Collects every problem in an input rather than stopping at the first,
//! so the player sees the full list at once. Errors block record
//! construction; warnings are informational.

use crate::ability::{Ability, MAX_SCORE, MIN_SCORE};
use crate::input::{
    CharacterInput, MAX_ARMOR, MAX_CLASS_POWERS, MAX_SPELL_LEVEL, MAX_SPELLS_PER_LEVEL,
    MAX_WEAPONS,
};
use crate::proficiency::{MAX_LEVEL, MIN_LEVEL};

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The field the issue concerns (e.g. `level`, `abilities.wisdom`).
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.field, self.message)
    }
}

/// Validate raw character entries.
///
/// Returns all issues found, errors and warnings mixed, in sheet order.
pub fn validate_input(input: &CharacterInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if input.race.trim().is_empty() {
        issues.push(ValidationIssue::warning("race", "race is blank"));
    }
    if input.class.trim().is_empty() {
        issues.push(ValidationIssue::warning("class", "class is blank"));
    }

    check_required(&mut issues, "level", input.level, MIN_LEVEL, MAX_LEVEL);

    for ability in Ability::ALL {
        let field = format!("abilities.{}", ability.key());
        let score = input.abilities.get(&ability).copied();
        check_required(&mut issues, &field, score, MIN_SCORE, MAX_SCORE);
    }

    check_required(&mut issues, "hit_points", input.hit_points, 1, i32::MAX);
    check_required(&mut issues, "armor_class", input.armor_class, 1, i32::MAX);

    check_capacity(&mut issues, "weapons", input.weapons.len(), MAX_WEAPONS);
    check_capacity(&mut issues, "armor", input.armor.len(), MAX_ARMOR);
    check_capacity(
        &mut issues,
        "class_powers",
        input.class_powers.len(),
        MAX_CLASS_POWERS,
    );

    for (level, spells) in &input.spells {
        let field = format!("spells.{level}");
        if *level > MAX_SPELL_LEVEL {
            issues.push(ValidationIssue::error(
                field,
                format!("spell level {level} is outside 0-{MAX_SPELL_LEVEL}"),
            ));
            continue;
        }
        check_capacity(&mut issues, &field, spells.len(), MAX_SPELLS_PER_LEVEL);
    }

    issues
}

/// Check that a value in `[min, max]` is present.
pub(crate) fn check_required(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: Option<i32>,
    min: i32,
    max: i32,
) {
    match value {
        None => issues.push(ValidationIssue::error(field, "is missing")),
        Some(v) if v < min => issues.push(ValidationIssue::error(
            field,
            format!("{v} is below the minimum of {min}"),
        )),
        Some(v) if v > max => issues.push(ValidationIssue::error(
            field,
            format!("{v} is above the maximum of {max}"),
        )),
        Some(_) => {}
    }
}

fn check_capacity(issues: &mut Vec<ValidationIssue>, field: &str, len: usize, max: usize) {
    if len > max {
        issues.push(ValidationIssue::error(
            field,
            format!("holds {len} entries, at most {max} allowed"),
        ));
    }
}
