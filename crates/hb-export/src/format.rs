//! Output formats.

use crate::error::{ExportError, ExportResult};

/// A document format the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Paginated PDF.
    Pdf,
    /// Markdown summary.
    Markdown,
    /// Pretty-printed JSON of the full record.
    Json,
}

impl ExportFormat {
    /// Parse a format name (`pdf`, `markdown`/`md`, `json`).
    pub fn parse(name: &str) -> ExportResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat(name.to_string())),
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Markdown => "text/markdown",
            Self::Json => "application/json",
        }
    }

    /// Filename used when the caller does not pick one.
    pub fn default_filename(self) -> String {
        format!("character_sheet.{}", self.extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}
