//! Markdown and JSON renditions of a sheet.

use hb_mechanics::CharacterRecord;

use crate::error::ExportResult;
use crate::layout::{Block, emitted_record};

/// Render blocks as a Markdown summary.
pub fn render_markdown(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        let is_item = matches!(block, Block::Item(_) | Block::Field { .. });
        if in_list && !is_item {
            out.push('\n');
        }
        in_list = is_item;

        match block {
            Block::Title(t) => out.push_str(&format!("# {t}\n\n")),
            Block::Heading(t) => out.push_str(&format!("## {t}\n\n")),
            Block::Subheading(t) => out.push_str(&format!("### {t}\n\n")),
            Block::Field { label, value } => out.push_str(&format!("- **{label}:** {value}\n")),
            Block::Item(t) => out.push_str(&format!("- {t}\n")),
        }
    }

    out
}

/// Render the emitted record as pretty-printed JSON.
pub fn render_json(record: &CharacterRecord) -> ExportResult<String> {
    let mut json = serde_json::to_string_pretty(&emitted_record(record))?;
    json.push('\n');
    Ok(json)
}
