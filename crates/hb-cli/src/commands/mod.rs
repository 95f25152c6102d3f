pub mod check;
pub mod export;
pub mod init;
pub mod show;
pub mod spell;

use std::path::Path;

use hb_mechanics::{CharacterInput, CharacterRecord};

/// Read and parse a character file.
fn read_input(file: &Path) -> Result<CharacterInput, String> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    CharacterInput::from_json(&json).map_err(|e| format!("{}: {e}", file.display()))
}

/// Read a character file and derive its record.
fn load_record(file: &Path) -> Result<CharacterRecord, String> {
    let input = read_input(file)?;
    tracing::debug!(file = %file.display(), "loaded character input");
    CharacterRecord::derive(input).map_err(|e| e.to_string())
}
