//! The six abilities, their scores, and score modifiers.

use serde::{Deserialize, Serialize};

/// Lowest score an ability may hold.
pub const MIN_SCORE: i32 = 1;
/// Highest score an ability may hold.
pub const MAX_SCORE: i32 = 30;

/// One of the six character abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Physical power.
    #[serde(alias = "str")]
    Strength,
    /// Agility and reflexes.
    #[serde(alias = "dex")]
    Dexterity,
    /// Endurance and health.
    #[serde(alias = "con")]
    Constitution,
    /// Reasoning and memory.
    #[serde(alias = "int")]
    Intelligence,
    /// Perception and insight.
    #[serde(alias = "wis")]
    Wisdom,
    /// Force of personality.
    #[serde(alias = "cha")]
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Full display name ("Strength").
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation ("STR").
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Lowercase key used in input documents and validation messages.
    pub fn key(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Modifier for an ability score: `floor((score - 10) / 2)`.
///
/// Uses floor division, so odd scores below 10 round toward negative
/// infinity (9 gives -1, not 0).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Scores for all six abilities, exactly one per ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl AbilityScores {
    /// Build from scores given in sheet order (STR, DEX, CON, INT, WIS, CHA).
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Get the score for an ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Set the score for an ability.
    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    /// The modifier for an ability, computed from its current score.
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_spot_checks() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(14), 2);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn modifier_table_for_valid_scores() {
        for score in MIN_SCORE..=MAX_SCORE {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn modifier_tracks_score_changes() {
        let mut scores = AbilityScores::default();
        assert_eq!(scores.modifier(Ability::Wisdom), 0);
        scores.set(Ability::Wisdom, 7);
        assert_eq!(scores.modifier(Ability::Wisdom), -2);
    }

    #[test]
    fn iter_is_in_sheet_order() {
        let scores = AbilityScores::new(15, 14, 13, 12, 10, 8);
        let order: Vec<_> = scores.iter().collect();
        assert_eq!(
            order,
            vec![
                (Ability::Strength, 15),
                (Ability::Dexterity, 14),
                (Ability::Constitution, 13),
                (Ability::Intelligence, 12),
                (Ability::Wisdom, 10),
                (Ability::Charisma, 8),
            ]
        );
    }

    #[test]
    fn deserialize_accepts_abbreviations() {
        let a: Ability = serde_json::from_str("\"dex\"").unwrap();
        assert_eq!(a, Ability::Dexterity);
        let a: Ability = serde_json::from_str("\"charisma\"").unwrap();
        assert_eq!(a, Ability::Charisma);
    }

    #[test]
    fn names_and_abbreviations() {
        assert_eq!(Ability::Intelligence.name(), "Intelligence");
        assert_eq!(Ability::Intelligence.abbreviation(), "INT");
        assert_eq!(Ability::Intelligence.key(), "intelligence");
        assert_eq!(Ability::Constitution.to_string(), "Constitution");
    }

    proptest! {
        #[test]
        fn modifier_is_floor_of_half(score in MIN_SCORE..=MAX_SCORE) {
            let m = ability_modifier(score);
            prop_assert!(2 * m <= score - 10);
            prop_assert!(score - 10 < 2 * m + 2);
            prop_assert!((-5..=10).contains(&m));
        }
    }
}
