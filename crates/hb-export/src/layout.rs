//! The ordered sheet layout shared by every renderer.
//!
//! Sections always appear in the same order: title, identity, ability
//! scores, skills, hit points and armor class, weapons, armor, class
//! powers, spells. Blank list entries are dropped here so no renderer has
//! to filter them again.

use hb_mechanics::{Ability, CharacterRecord, Skill, present_entries, signed};

/// Default sheet title.
pub const DEFAULT_TITLE: &str = "D&D 5e Character Sheet";

/// One line-level element of a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The document title.
    Title(String),
    /// A section heading ("Ability Scores").
    Heading(String),
    /// A heading inside a section ("Spell Level 1").
    Subheading(String),
    /// A labelled value.
    Field {
        /// Label text.
        label: String,
        /// Value text.
        value: String,
    },
    /// A list entry.
    Item(String),
}

impl Block {
    fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Plain-text rendering of the block, without list markers.
    pub fn text(&self) -> String {
        match self {
            Self::Title(t) | Self::Heading(t) | Self::Subheading(t) | Self::Item(t) => t.clone(),
            Self::Field { label, value } => format!("{label}: {value}"),
        }
    }
}

/// The record as it is emitted: derived values recomputed from the raw
/// entries, blank list entries dropped, present entries trimmed, and spell
/// levels without a present spell removed.
pub fn emitted_record(record: &CharacterRecord) -> CharacterRecord {
    let mut record = record.refreshed();
    record.weapons = present(&record.weapons);
    record.armor = present(&record.armor);
    record.class_powers = present(&record.class_powers);
    record.spells.retain(|_, spells| {
        let kept = present(spells);
        *spells = kept;
        !spells.is_empty()
    });
    record
}

fn present(entries: &[String]) -> Vec<String> {
    present_entries(entries).map(str::to_string).collect()
}

/// Lay out a record as an ordered list of blocks.
pub fn layout_sheet(record: &CharacterRecord, title: &str) -> Vec<Block> {
    let record = &emitted_record(record);
    let mut blocks = vec![Block::Title(title.to_string())];

    blocks.push(Block::Heading("Character Information".to_string()));
    blocks.push(Block::field("Race", record.race.trim()));
    blocks.push(Block::field("Class", record.class.trim()));
    blocks.push(Block::field("Level", record.level.to_string()));
    blocks.push(Block::field(
        "Proficiency Bonus",
        signed(record.proficiency_bonus),
    ));

    blocks.push(Block::Heading("Ability Scores".to_string()));
    for ability in Ability::ALL {
        let score = record.abilities.get(ability);
        let modifier = signed(record.ability_modifier(ability));
        blocks.push(Block::field(ability.name(), format!("{score} ({modifier})")));
    }

    blocks.push(Block::Heading("Skills".to_string()));
    for ability in Ability::ALL {
        for skill in Skill::for_ability(ability) {
            if let Some(entry) = record.skill(skill) {
                blocks.push(Block::field(skill.name(), signed(entry.modifier)));
            }
        }
    }

    blocks.push(Block::Heading("Health and Armor".to_string()));
    blocks.push(Block::field("Hit Points", record.hit_points.to_string()));
    blocks.push(Block::field("Armor Class", record.armor_class.to_string()));

    push_list(&mut blocks, "Weapons", &record.weapons);
    push_list(&mut blocks, "Armor", &record.armor);
    push_list(&mut blocks, "Class Powers", &record.class_powers);

    blocks.push(Block::Heading("Spells".to_string()));
    for level in 0..=hb_mechanics::input::MAX_SPELL_LEVEL {
        let Some(spells) = record.spells.get(&level) else {
            continue;
        };
        let present: Vec<&str> = present_entries(spells).collect();
        if present.is_empty() {
            continue;
        }
        blocks.push(Block::Subheading(format!("Spell Level {level}")));
        blocks.extend(present.into_iter().map(|s| Block::Item(s.to_string())));
    }

    blocks
}

fn push_list(blocks: &mut Vec<Block>, heading: &str, entries: &[String]) {
    blocks.push(Block::Heading(heading.to_string()));
    blocks.extend(present_entries(entries).map(|e| Block::Item(e.to_string())));
}
