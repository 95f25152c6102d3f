use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hb_mechanics::{Ability, CharacterRecord, Proficiency, Skill, present_entries, signed};

pub fn run(file: &Path) -> Result<(), String> {
    let record = super::load_record(file)?;
    print_summary(&record);
    Ok(())
}

fn print_summary(record: &CharacterRecord) {
    println!("  {}", "Character Information".bold());
    println!("  race:              {}", or_dash(&record.race));
    println!("  class:             {}", or_dash(&record.class));
    println!("  level:             {}", record.level);
    println!("  proficiency bonus: {}", signed(record.proficiency_bonus));
    println!();

    let mut abilities = Table::new();
    abilities.set_content_arrangement(ContentArrangement::Dynamic);
    abilities.set_header(vec!["Ability", "Score", "Modifier"]);
    for ability in Ability::ALL {
        abilities.add_row(vec![
            ability.name().to_string(),
            record.abilities.get(ability).to_string(),
            signed(record.ability_modifier(ability)),
        ]);
    }
    println!("{abilities}");
    println!();

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Skill", "Ability", "Proficiency", "Modifier"]);
    for ability in Ability::ALL {
        for skill in Skill::for_ability(ability) {
            let Some(entry) = record.skill(skill) else {
                continue;
            };
            let proficiency = match entry.proficiency {
                Proficiency::None => "-".to_string(),
                p => p.to_string(),
            };
            skills.add_row(vec![
                skill.name().to_string(),
                ability.abbreviation().to_string(),
                proficiency,
                signed(entry.modifier),
            ]);
        }
    }
    println!("{skills}");
    println!();

    println!("  {}", "Health and Armor".bold());
    println!("  hit points:  {}", record.hit_points);
    println!("  armor class: {}", record.armor_class);

    print_list("Weapons", &record.weapons);
    print_list("Armor", &record.armor);
    print_list("Class Powers", &record.class_powers);

    println!();
    println!("  {}", "Spells".bold());
    let mut any = false;
    for (level, spells) in &record.spells {
        let present: Vec<&str> = present_entries(spells).collect();
        if present.is_empty() {
            continue;
        }
        any = true;
        println!("  {}", format!("Spell Level {level}").dimmed());
        for spell in present {
            println!("    - {spell}");
        }
    }
    if !any {
        println!("  {}", "(none)".dimmed());
    }
}

fn print_list(heading: &str, entries: &[String]) {
    println!();
    println!("  {}", heading.bold());
    let mut any = false;
    for entry in present_entries(entries) {
        any = true;
        println!("    - {entry}");
    }
    if !any {
        println!("  {}", "(none)".dimmed());
    }
}

fn or_dash(s: &str) -> &str {
    let trimmed = s.trim();
    if trimmed.is_empty() { "-" } else { trimmed }
}
