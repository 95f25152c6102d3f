//! Proficiency states and the level-based proficiency bonus.

use serde::{Deserialize, Serialize};

/// Lowest character level.
pub const MIN_LEVEL: i32 = 1;
/// Highest character level.
pub const MAX_LEVEL: i32 = 20;

/// How well a character knows a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// Untrained: no bonus.
    #[default]
    None,
    /// Trained: adds the proficiency bonus once.
    Proficient,
    /// Expertise: adds the proficiency bonus twice.
    #[serde(alias = "expertise")]
    Expert,
}

impl Proficiency {
    /// How many times the proficiency bonus is added.
    pub fn multiplier(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Proficient => 1,
            Self::Expert => 2,
        }
    }

    /// Collapse the two-toggle representation into a single state.
    ///
    /// Expertise implies proficiency, so `expertise` alone is enough for
    /// [`Proficiency::Expert`]. There is no state above expert.
    pub fn from_toggles(proficient: bool, expertise: bool) -> Self {
        match (proficient, expertise) {
            (_, true) => Self::Expert,
            (true, false) => Self::Proficient,
            (false, false) => Self::None,
        }
    }

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Proficient => "proficient",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Proficiency bonus for a character level.
///
/// Levels outside 1-20 are clamped to the nearest defined level.
pub fn proficiency_bonus(level: i32) -> i32 {
    match level.clamp(MIN_LEVEL, MAX_LEVEL) {
        ..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// Final modifier for a skill check.
pub fn final_skill_modifier(
    ability_modifier: i32,
    proficiency: Proficiency,
    proficiency_bonus: i32,
) -> i32 {
    ability_modifier + proficiency.multiplier() * proficiency_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bonus_table() {
        let expected = [
            (1..=4, 2),
            (5..=8, 3),
            (9..=12, 4),
            (13..=16, 5),
            (17..=20, 6),
        ];
        for (levels, bonus) in expected {
            for level in levels {
                assert_eq!(proficiency_bonus(level), bonus, "level {level}");
            }
        }
    }

    #[test]
    fn bonus_is_non_decreasing() {
        for level in MIN_LEVEL..MAX_LEVEL {
            assert!(proficiency_bonus(level) <= proficiency_bonus(level + 1));
        }
    }

    #[test]
    fn bonus_clamps_out_of_range() {
        assert_eq!(proficiency_bonus(0), 2);
        assert_eq!(proficiency_bonus(-7), 2);
        assert_eq!(proficiency_bonus(21), 6);
        assert_eq!(proficiency_bonus(i32::MAX), 6);
    }

    #[test]
    fn skill_modifier_by_state() {
        assert_eq!(final_skill_modifier(2, Proficiency::None, 3), 2);
        assert_eq!(final_skill_modifier(2, Proficiency::Proficient, 3), 5);
        assert_eq!(final_skill_modifier(2, Proficiency::Expert, 3), 8);
        assert_eq!(final_skill_modifier(-1, Proficiency::Proficient, 2), 1);
    }

    #[test]
    fn toggles_collapse() {
        assert_eq!(Proficiency::from_toggles(false, false), Proficiency::None);
        assert_eq!(Proficiency::from_toggles(true, false), Proficiency::Proficient);
        assert_eq!(Proficiency::from_toggles(true, true), Proficiency::Expert);
        assert_eq!(Proficiency::from_toggles(false, true), Proficiency::Expert);
    }

    #[test]
    fn deserialize_states() {
        let p: Proficiency = serde_json::from_str("\"expertise\"").unwrap();
        assert_eq!(p, Proficiency::Expert);
        let p: Proficiency = serde_json::from_str("\"proficient\"").unwrap();
        assert_eq!(p, Proficiency::Proficient);
        assert!(serde_json::from_str::<Proficiency>("\"double\"").is_err());
    }

    proptest! {
        #[test]
        fn expert_adds_twice_the_bonus(m in -5i32..=10, b in 2i32..=6) {
            prop_assert_eq!(
                final_skill_modifier(m, Proficiency::Expert, b),
                final_skill_modifier(m, Proficiency::None, b) + 2 * b
            );
            prop_assert_eq!(
                final_skill_modifier(m, Proficiency::Proficient, b),
                final_skill_modifier(m, Proficiency::None, b) + b
            );
        }

        #[test]
        fn bonus_monotonic_everywhere(a in -100i32..100, b in -100i32..100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(proficiency_bonus(lo) <= proficiency_bonus(hi));
            prop_assert!((2..=6).contains(&proficiency_bonus(a)));
        }
    }
}
