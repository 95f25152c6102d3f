//! Error types for the sheet exporter.

use hb_mechanics::MechError;

/// Errors that can occur while exporting a character sheet.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The record failed validation; nothing was rendered.
    #[error(transparent)]
    Invalid(#[from] MechError),

    /// The PDF writer failed.
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An export format name was not recognized.
    #[error("unsupported format: \"{0}\". Use: pdf, markdown, json")]
    UnsupportedFormat(String),
}

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
