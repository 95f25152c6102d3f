//! The raw character entries, as supplied by the input boundary.
//!
//! Every field is optional at the parse level. Missing or out-of-range
//! numbers are reported by [`crate::validate_input`], not by the parser,
//! so a half-filled sheet still yields a complete list of problems.

use std::collections::{BTreeMap, HashMap};

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ability::Ability;
use crate::error::MechResult;
use crate::proficiency::Proficiency;
use crate::skill::Skill;

/// Most weapon entries a sheet holds.
pub const MAX_WEAPONS: usize = 3;
/// Most armor entries a sheet holds.
pub const MAX_ARMOR: usize = 3;
/// Most class-power entries a sheet holds.
pub const MAX_CLASS_POWERS: usize = 6;
/// Most spells per spell level.
pub const MAX_SPELLS_PER_LEVEL: usize = 6;
/// Highest spell level (0 is cantrips).
pub const MAX_SPELL_LEVEL: u8 = 9;

/// Immutable snapshot of everything the player entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterInput {
    /// Character race.
    pub race: String,
    /// Character class.
    pub class: String,
    /// Character level (1-20).
    pub level: Option<i32>,
    /// Ability scores keyed by ability (1-30 each). An ability given twice,
    /// under its full name and its abbreviation, is a parse error.
    #[serde(deserialize_with = "unique_abilities")]
    pub abilities: HashMap<Ability, i32>,
    /// Per-skill proficiency; absent skills are untrained.
    pub skills: HashMap<Skill, SkillSetting>,
    /// Hit points (at least 1).
    #[serde(alias = "hp")]
    pub hit_points: Option<i32>,
    /// Armor class (at least 1).
    #[serde(alias = "ac")]
    pub armor_class: Option<i32>,
    /// Weapon names, blanks allowed.
    pub weapons: Vec<String>,
    /// Armor names, blanks allowed.
    pub armor: Vec<String>,
    /// Class power names, blanks allowed.
    pub class_powers: Vec<String>,
    /// Spell names keyed by spell level.
    pub spells: BTreeMap<u8, Vec<String>>,
}

fn unique_abilities<'de, D>(deserializer: D) -> Result<HashMap<Ability, i32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AbilityMapVisitor;

    impl<'de> Visitor<'de> for AbilityMapVisitor {
        type Value = HashMap<Ability, i32>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of ability scores")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut scores = HashMap::new();
            while let Some((ability, score)) = map.next_entry::<Ability, i32>()? {
                if scores.insert(ability, score).is_some() {
                    return Err(de::Error::custom(format_args!(
                        "duplicate score for {}",
                        ability.key()
                    )));
                }
            }
            Ok(scores)
        }
    }

    deserializer.deserialize_map(AbilityMapVisitor)
}

/// A skill's proficiency as written in the input.
///
/// Accepts either a state (`"expert"`) or the two-toggle form
/// (`{ "proficient": true, "expertise": false }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillSetting {
    /// A single proficiency state.
    State(Proficiency),
    /// Independent proficiency and expertise toggles.
    Toggles {
        /// Proficiency toggle.
        #[serde(default)]
        proficient: bool,
        /// Expertise toggle.
        #[serde(default)]
        expertise: bool,
    },
}

impl SkillSetting {
    /// The unified proficiency state.
    pub fn proficiency(self) -> Proficiency {
        match self {
            Self::State(p) => p,
            Self::Toggles {
                proficient,
                expertise,
            } => Proficiency::from_toggles(proficient, expertise),
        }
    }
}

impl From<Proficiency> for SkillSetting {
    fn from(p: Proficiency) -> Self {
        Self::State(p)
    }
}

impl CharacterInput {
    /// Parse an input document from JSON.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Proficiency for a skill, `None` when the skill is not listed.
    pub fn proficiency(&self, skill: Skill) -> Proficiency {
        self.skills
            .get(&skill)
            .map(|s| s.proficiency())
            .unwrap_or_default()
    }

    /// A starting character: level 1, all scores 10, HP and AC 10.
    pub fn template() -> Self {
        Self {
            race: "Human".to_string(),
            class: "Sorcerer".to_string(),
            level: Some(1),
            abilities: Ability::ALL.into_iter().map(|a| (a, 10)).collect(),
            skills: HashMap::new(),
            hit_points: Some(10),
            armor_class: Some(10),
            weapons: vec![String::new(); MAX_WEAPONS],
            armor: vec![String::new(); MAX_ARMOR],
            class_powers: vec![String::new(); MAX_CLASS_POWERS],
            spells: (0..=MAX_SPELL_LEVEL).map(|l| (l, Vec::new())).collect(),
        }
    }
}
