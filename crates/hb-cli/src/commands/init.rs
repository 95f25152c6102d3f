use std::fs;
use std::path::Path;

use hb_mechanics::CharacterInput;

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    // Going through Value sorts the keys, so the template is stable.
    let value = serde_json::to_value(CharacterInput::template())
        .map_err(|e| format!("cannot build template: {e}"))?;
    let mut content =
        serde_json::to_string_pretty(&value).map_err(|e| format!("cannot build template: {e}"))?;
    content.push('\n');

    fs::write(file, content).map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    let name = file.display();
    println!("Created character file '{name}'");
    println!();
    println!("Get started:");
    println!("  # Edit {name}: level, abilities, skills, equipment, spells");
    println!("  hb check {name}   # Validate the entries");
    println!("  hb show {name}    # Show the derived summary");
    println!("  hb export {name}  # Write character_sheet.pdf");

    Ok(())
}
