//! The derived character record.
//!
//! A [`CharacterRecord`] is rebuilt from a [`CharacterInput`] every time a
//! summary or export is requested. It holds the raw entries alongside
//! every derived value and is never mutated in place by this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ability::{Ability, AbilityScores, MAX_SCORE, MIN_SCORE};
use crate::error::{MechError, MechResult, ValidationErrors};
use crate::input::CharacterInput;
use crate::proficiency::{
    MAX_LEVEL, MIN_LEVEL, Proficiency, final_skill_modifier, proficiency_bonus,
};
use crate::skill::Skill;
use crate::validate::{ValidationIssue, check_required, validate_input};

/// A skill with its proficiency and final modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    /// The skill.
    pub skill: Skill,
    /// Proficiency state.
    pub proficiency: Proficiency,
    /// Ability modifier plus the applicable proficiency bonus.
    pub modifier: i32,
}

/// Raw and derived values describing one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character race.
    pub race: String,
    /// Character class.
    pub class: String,
    /// Character level.
    pub level: i32,
    /// Bonus derived from level.
    pub proficiency_bonus: i32,
    /// The six ability scores.
    pub abilities: AbilityScores,
    /// Every skill in sheet order.
    pub skills: Vec<SkillScore>,
    /// Hit points.
    pub hit_points: i32,
    /// Armor class.
    pub armor_class: i32,
    /// Weapon names as entered.
    pub weapons: Vec<String>,
    /// Armor names as entered.
    pub armor: Vec<String>,
    /// Class power names as entered.
    pub class_powers: Vec<String>,
    /// Spell names by spell level.
    pub spells: BTreeMap<u8, Vec<String>>,
}

impl CharacterRecord {
    /// Validate the entries and compute every derived value.
    pub fn derive(input: CharacterInput) -> MechResult<Self> {
        let errors: Vec<ValidationIssue> = validate_input(&input)
            .into_iter()
            .filter(|i| i.is_error)
            .collect();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "character input rejected");
            return Err(MechError::Validation(ValidationErrors(errors)));
        }

        // Validation guarantees these are present.
        let level = input.level.unwrap_or(MIN_LEVEL);
        let bonus = proficiency_bonus(level);

        let mut abilities = AbilityScores::default();
        for ability in Ability::ALL {
            if let Some(score) = input.abilities.get(&ability) {
                abilities.set(ability, *score);
            }
        }

        let skills = skill_scores(&abilities, bonus, |skill| input.proficiency(skill));

        tracing::debug!(level, proficiency_bonus = bonus, "derived character record");

        Ok(Self {
            race: input.race,
            class: input.class,
            level,
            proficiency_bonus: bonus,
            abilities,
            skills,
            hit_points: input.hit_points.unwrap_or(1),
            armor_class: input.armor_class.unwrap_or(1),
            weapons: input.weapons,
            armor: input.armor,
            class_powers: input.class_powers,
            spells: input.spells,
        })
    }

    /// Re-check the numeric domains of the record.
    ///
    /// Records can be built or edited by hand, so exporters call this
    /// before emitting anything.
    pub fn validate(&self) -> MechResult<()> {
        let mut issues = Vec::new();
        check_required(&mut issues, "level", Some(self.level), MIN_LEVEL, MAX_LEVEL);
        for (ability, score) in self.abilities.iter() {
            let field = format!("abilities.{}", ability.key());
            check_required(&mut issues, &field, Some(score), MIN_SCORE, MAX_SCORE);
        }
        check_required(&mut issues, "hit_points", Some(self.hit_points), 1, i32::MAX);
        check_required(&mut issues, "armor_class", Some(self.armor_class), 1, i32::MAX);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(MechError::Validation(ValidationErrors(issues)))
        }
    }

    /// A copy with the proficiency bonus and every skill modifier
    /// recomputed from the current level, scores, and proficiencies.
    pub fn refreshed(&self) -> Self {
        let bonus = proficiency_bonus(self.level);
        let skills = skill_scores(&self.abilities, bonus, |skill| {
            self.skill(skill)
                .map_or(Proficiency::None, |entry| entry.proficiency)
        });
        Self {
            proficiency_bonus: bonus,
            skills,
            ..self.clone()
        }
    }

    /// Modifier for an ability.
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// The entry for a skill.
    pub fn skill(&self, skill: Skill) -> Option<&SkillScore> {
        self.skills.iter().find(|s| s.skill == skill)
    }
}

fn skill_scores(
    abilities: &AbilityScores,
    bonus: i32,
    proficiency_of: impl Fn(Skill) -> Proficiency,
) -> Vec<SkillScore> {
    Skill::ALL
        .into_iter()
        .map(|skill| {
            let proficiency = proficiency_of(skill);
            SkillScore {
                skill,
                proficiency,
                modifier: final_skill_modifier(
                    abilities.modifier(skill.ability()),
                    proficiency,
                    bonus,
                ),
            }
        })
        .collect()
}

/// Entries whose trimmed text is non-empty, trimmed.
pub fn present_entries(entries: &[String]) -> impl Iterator<Item = &str> {
    entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_five_input() -> CharacterInput {
        let mut input = CharacterInput::template();
        input.level = Some(5);
        input.abilities.insert(Ability::Strength, 14);
        input
            .skills
            .insert(Skill::Athletics, Proficiency::Expert.into());
        input
    }

    #[test]
    fn derive_level_five_expert_athletics() {
        let record = CharacterRecord::derive(level_five_input()).unwrap();
        assert_eq!(record.proficiency_bonus, 3);
        assert_eq!(record.ability_modifier(Ability::Strength), 2);
        let athletics = record.skill(Skill::Athletics).unwrap();
        assert_eq!(athletics.proficiency, Proficiency::Expert);
        assert_eq!(athletics.modifier, 8);
        assert_eq!(crate::signed(athletics.modifier), "+8");
    }

    #[test]
    fn derive_lists_every_skill_in_order() {
        let record = CharacterRecord::derive(CharacterInput::template()).unwrap();
        let skills: Vec<Skill> = record.skills.iter().map(|s| s.skill).collect();
        assert_eq!(skills, Skill::ALL.to_vec());
        assert!(record.skills.iter().all(|s| s.modifier == 0));
    }

    #[test]
    fn derive_uses_owning_ability() {
        let mut input = CharacterInput::template();
        input.abilities.insert(Ability::Wisdom, 8);
        input
            .skills
            .insert(Skill::Perception, Proficiency::Proficient.into());
        let record = CharacterRecord::derive(input).unwrap();
        assert_eq!(record.skill(Skill::Perception).unwrap().modifier, 1);
        assert_eq!(record.skill(Skill::Insight).unwrap().modifier, -1);
        assert_eq!(record.skill(Skill::Arcana).unwrap().modifier, 0);
    }

    #[test]
    fn derive_rejects_zero_hit_points() {
        let mut input = CharacterInput::template();
        input.hit_points = Some(0);
        let err = CharacterRecord::derive(input).unwrap_err();
        let issues = err.validation_issues().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "hit_points");
    }

    #[test]
    fn derive_ignores_warnings() {
        let mut input = CharacterInput::template();
        input.race.clear();
        assert!(CharacterRecord::derive(input).is_ok());
    }

    #[test]
    fn validate_catches_edited_record() {
        let mut record = CharacterRecord::derive(CharacterInput::template()).unwrap();
        assert!(record.validate().is_ok());
        record.hit_points = 0;
        record.abilities.set(Ability::Charisma, 40);
        let err = record.validate().unwrap_err();
        match err {
            MechError::Validation(errors) => {
                assert!(errors.mentions("hit_points"));
                assert!(errors.mentions("abilities.charisma"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn refreshed_follows_edited_level_and_scores() {
        let mut input = CharacterInput::template();
        input
            .skills
            .insert(Skill::Athletics, Proficiency::Expert.into());
        let mut record = CharacterRecord::derive(input).unwrap();
        record.level = 17;
        record.abilities.set(Ability::Strength, 20);

        let record = record.refreshed();
        assert_eq!(record.proficiency_bonus, 6);
        let athletics = record.skill(Skill::Athletics).unwrap();
        assert_eq!(athletics.proficiency, Proficiency::Expert);
        assert_eq!(athletics.modifier, 17);
        assert_eq!(record.skill(Skill::Acrobatics).unwrap().modifier, 0);
    }

    #[test]
    fn refreshed_is_identity_for_derived_record() {
        let record = CharacterRecord::derive(level_five_input()).unwrap();
        assert_eq!(record.refreshed(), record);
    }

    #[test]
    fn present_entries_filters_blanks() {
        let entries = vec!["Sword".to_string(), String::new(), "  ".to_string()];
        let present: Vec<&str> = present_entries(&entries).collect();
        assert_eq!(present, vec!["Sword"]);
    }

    #[test]
    fn validation_error_display_lists_issues() {
        let err = CharacterRecord::derive(CharacterInput::default()).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("validation failed"));
        assert!(text.contains("error: level: is missing"));
    }
}
