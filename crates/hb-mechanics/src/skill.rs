//! Skills and the fixed skill-to-ability mapping.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// A named check tied to exactly one ability.
///
/// No skill belongs to Constitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Strength: climbing, jumping, swimming.
    Athletics,
    /// Dexterity: balance and tumbling.
    Acrobatics,
    /// Dexterity: legerdemain and pickpocketing.
    SleightOfHand,
    /// Dexterity: moving unseen.
    Stealth,
    /// Intelligence: magical lore.
    Arcana,
    /// Intelligence: historical lore.
    History,
    /// Intelligence: deduction from clues.
    Investigation,
    /// Intelligence: terrain, plants, and animals.
    Nature,
    /// Intelligence: rites and deities.
    Religion,
    /// Wisdom: calming and handling beasts.
    AnimalHandling,
    /// Wisdom: reading intentions.
    Insight,
    /// Wisdom: stabilizing and diagnosing.
    Medicine,
    /// Wisdom: noticing things.
    Perception,
    /// Wisdom: tracking and foraging.
    Survival,
    /// Charisma: misleading others.
    Deception,
    /// Charisma: threats and coercion.
    Intimidation,
    /// Charisma: entertaining an audience.
    Performance,
    /// Charisma: tactful influence.
    Persuasion,
}

impl Skill {
    /// All skills, grouped by owning ability in sheet order.
    pub const ALL: [Skill; 18] = [
        Skill::Athletics,
        Skill::Acrobatics,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Arcana,
        Skill::History,
        Skill::Investigation,
        Skill::Nature,
        Skill::Religion,
        Skill::AnimalHandling,
        Skill::Insight,
        Skill::Medicine,
        Skill::Perception,
        Skill::Survival,
        Skill::Deception,
        Skill::Intimidation,
        Skill::Performance,
        Skill::Persuasion,
    ];

    /// The ability this skill draws its modifier from.
    pub fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Ability::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Display name ("Sleight of Hand").
    pub fn name(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Acrobatics => "Acrobatics",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Arcana => "Arcana",
            Self::History => "History",
            Self::Investigation => "Investigation",
            Self::Nature => "Nature",
            Self::Religion => "Religion",
            Self::AnimalHandling => "Animal Handling",
            Self::Insight => "Insight",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Survival => "Survival",
            Self::Deception => "Deception",
            Self::Intimidation => "Intimidation",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
        }
    }

    /// Skills that draw on the given ability, in sheet order.
    pub fn for_ability(ability: Ability) -> impl Iterator<Item = Skill> {
        Self::ALL.into_iter().filter(move |s| s.ability() == ability)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
