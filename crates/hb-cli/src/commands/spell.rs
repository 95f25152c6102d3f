use colored::Colorize;
use hb_lookup::{LookupConfig, SpellLookup};

pub fn run(name: &str) -> Result<(), String> {
    let config = LookupConfig::from_env();
    let lookup = SpellLookup::http(&config).map_err(|e| e.to_string())?;
    let spell = lookup.lookup(name).map_err(|e| format!("lookup failed: {e}"))?;

    if !spell.name_found {
        eprintln!(
            "  {}",
            format!("warning: \"{}\" not found in the page content", spell.name).yellow()
        );
    }

    println!("  {} {}", spell.name.bold(), format!("({})", spell.url).dimmed());
    println!();
    for line in spell.text.lines() {
        println!("  {line}");
    }

    Ok(())
}
