//! Sheet exporter for Heldenblatt.
//!
//! Lays a [`CharacterRecord`] out as an ordered list of [`Block`]s and
//! renders it as PDF, Markdown, or JSON. Every renderer is deterministic
//! and touches neither disk nor network.

pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod markdown;
pub mod pdf;

pub use config::{ExportConfig, PdfConfig};
pub use error::{ExportError, ExportResult};
pub use format::ExportFormat;
pub use layout::{Block, DEFAULT_TITLE, emitted_record, layout_sheet};
pub use markdown::{render_json, render_markdown};
pub use pdf::render_pdf;

use hb_mechanics::CharacterRecord;

/// Validate a record and render it in the configured format.
///
/// Fails without producing any bytes if the record's level, ability
/// scores, hit points, or armor class are out of range.
pub fn export_sheet(record: &CharacterRecord, config: &ExportConfig) -> ExportResult<Vec<u8>> {
    record.validate()?;

    let bytes = match config.format {
        ExportFormat::Pdf => {
            let blocks = layout_sheet(record, &config.title);
            render_pdf(&blocks, &config.title, &config.pdf)?
        }
        ExportFormat::Markdown => {
            render_markdown(&layout_sheet(record, &config.title)).into_bytes()
        }
        ExportFormat::Json => render_json(record)?.into_bytes(),
    };

    tracing::debug!(format = %config.format, bytes = bytes.len(), "exported sheet");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_mechanics::{Ability, CharacterInput, MechError, Proficiency, Skill};

    fn record() -> CharacterRecord {
        let mut input = CharacterInput::template();
        input.weapons = vec!["Sword".to_string(), String::new(), "  ".to_string()];
        input.spells.insert(2, vec!["Misty Step".to_string()]);
        CharacterRecord::derive(input).unwrap()
    }

    #[test]
    fn export_is_byte_identical_across_runs() {
        let record = record();
        let config = ExportConfig::default();
        let first = export_sheet(&record, &config).unwrap();
        let second = export_sheet(&record, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn export_rejects_zero_hit_points() {
        let mut record = record();
        record.hit_points = 0;
        let err = export_sheet(&record, &ExportConfig::default()).unwrap_err();
        match err {
            ExportError::Invalid(MechError::Validation(errors)) => {
                assert!(errors.mentions("hit_points"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn export_order_ignores_input_map_order() {
        // Insert abilities in reverse so the input map has no useful order.
        let mut input = CharacterInput::template();
        input.abilities.clear();
        for (i, ability) in Ability::ALL.iter().rev().enumerate() {
            input.abilities.insert(*ability, 10 + i as i32);
        }
        let record = CharacterRecord::derive(input).unwrap();
        let md = String::from_utf8(
            export_sheet(
                &record,
                &ExportConfig::default().with_format(ExportFormat::Markdown),
            )
            .unwrap(),
        )
        .unwrap();

        let positions: Vec<usize> = Ability::ALL
            .iter()
            .map(|a| md.find(&format!("**{}:**", a.name())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn markdown_export_filters_blank_weapons() {
        let md = String::from_utf8(
            export_sheet(
                &record(),
                &ExportConfig::default().with_format(ExportFormat::Markdown),
            )
            .unwrap(),
        )
        .unwrap();
        assert!(md.contains("## Weapons\n\n- Sword\n\n## Armor"));
        assert!(md.contains("### Spell Level 2\n\n- Misty Step\n"));
        assert!(!md.contains("Spell Level 0"));
    }

    #[test]
    fn pdf_export_has_one_weapon_line() {
        let bytes = export_sheet(&record(), &ExportConfig::default()).unwrap();
        let needle = b"- Sword";
        let hits = bytes.windows(needle.len()).filter(|w| w == needle).count();
        assert_eq!(hits, 1);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn json_export() {
        let bytes = export_sheet(
            &record(),
            &ExportConfig::default().with_format(ExportFormat::Json),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let weapons = value["weapons"].as_array().unwrap();
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0], "Sword");
        let spells = value["spells"].as_object().unwrap();
        assert_eq!(spells.len(), 1);
        assert_eq!(spells["2"][0], "Misty Step");
    }

    #[test]
    fn edited_record_exports_current_derived_values() {
        let mut input = CharacterInput::template();
        input
            .skills
            .insert(Skill::Athletics, Proficiency::Expert.into());
        let mut record = CharacterRecord::derive(input).unwrap();
        record.level = 17;
        record.abilities.set(Ability::Strength, 20);

        let md = String::from_utf8(
            export_sheet(
                &record,
                &ExportConfig::default().with_format(ExportFormat::Markdown),
            )
            .unwrap(),
        )
        .unwrap();
        assert!(md.contains("- **Level:** 17\n"));
        assert!(md.contains("- **Proficiency Bonus:** +6\n"));
        assert!(md.contains("- **Strength:** 20 (+5)\n"));
        assert!(md.contains("- **Athletics:** +17\n"));

        let json = export_sheet(
            &record,
            &ExportConfig::default().with_format(ExportFormat::Json),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["proficiency_bonus"], 6);
        assert_eq!(value["skills"][0]["modifier"], 17);
    }
}
