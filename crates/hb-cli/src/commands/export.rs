use std::io::Write;
use std::path::{Path, PathBuf};

use hb_export::{ExportConfig, ExportFormat, export_sheet};

pub fn run(
    file: &Path,
    format: &str,
    output: Option<&Path>,
    title: Option<&str>,
) -> Result<(), String> {
    let format = ExportFormat::parse(format).map_err(|e| e.to_string())?;
    let record = super::load_record(file)?;

    let mut config = ExportConfig::default().with_format(format);
    if let Some(title) = title {
        config = config.with_title(title);
    }

    let bytes = export_sheet(&record, &config).map_err(|e| e.to_string())?;

    let path = output.map_or_else(|| PathBuf::from(format.default_filename()), Path::to_path_buf);
    if path.as_os_str() == "-" {
        std::io::stdout()
            .write_all(&bytes)
            .map_err(|e| format!("cannot write to stdout: {e}"))?;
        return Ok(());
    }

    std::fs::write(&path, &bytes)
        .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!(
        "  Exported {} ({}, {} bytes) to {}",
        format,
        format.mime_type(),
        bytes.len(),
        path.display()
    );

    Ok(())
}
