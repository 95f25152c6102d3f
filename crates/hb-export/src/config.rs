//! Export configuration.

use crate::format::ExportFormat;
use crate::layout::DEFAULT_TITLE;

/// Page geometry and type sizes for PDF output. Lengths are in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    /// Page width.
    pub page_width_mm: f32,
    /// Page height.
    pub page_height_mm: f32,
    /// Margin on every side; a new page starts when the bottom margin is reached.
    pub margin_mm: f32,
    /// Vertical distance between consecutive lines.
    pub line_pitch_mm: f32,
    /// Font size of the title, in points.
    pub title_size: u16,
    /// Font size of everything else, in points.
    pub body_size: u16,
}

impl Default for PdfConfig {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 15.0,
            line_pitch_mm: 10.0,
            title_size: 16,
            body_size: 12,
        }
    }
}

impl PdfConfig {
    /// Set the page size.
    pub fn with_page_size(mut self, width_mm: f32, height_mm: f32) -> Self {
        self.page_width_mm = width_mm;
        self.page_height_mm = height_mm;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin_mm: f32) -> Self {
        self.margin_mm = margin_mm.max(0.0);
        self
    }

    /// Set the line pitch (clamped to at least 1 mm).
    pub fn with_line_pitch(mut self, pitch_mm: f32) -> Self {
        self.line_pitch_mm = pitch_mm.max(1.0);
        self
    }
}

/// Everything that controls a single export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Output format.
    pub format: ExportFormat,
    /// Title printed at the top of the sheet.
    pub title: String,
    /// PDF page settings, used when `format` is PDF.
    pub pdf: PdfConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Pdf,
            title: DEFAULT_TITLE.to_string(),
            pdf: PdfConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Set the output format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the sheet title. A blank title keeps the default.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    /// Set the PDF page settings.
    pub fn with_pdf(mut self, pdf: PdfConfig) -> Self {
        self.pdf = pdf;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ExportConfig::default();
        assert_eq!(cfg.format, ExportFormat::Pdf);
        assert_eq!(cfg.title, DEFAULT_TITLE);
        assert_eq!(cfg.pdf.margin_mm, 15.0);
        assert_eq!(cfg.pdf.line_pitch_mm, 10.0);
    }

    #[test]
    fn builder_methods() {
        let cfg = ExportConfig::default()
            .with_format(ExportFormat::Markdown)
            .with_title("Elara")
            .with_pdf(PdfConfig::default().with_page_size(216.0, 279.0));
        assert_eq!(cfg.format, ExportFormat::Markdown);
        assert_eq!(cfg.title, "Elara");
        assert_eq!(cfg.pdf.page_width_mm, 216.0);
    }

    #[test]
    fn blank_title_keeps_default() {
        let cfg = ExportConfig::default().with_title("  ");
        assert_eq!(cfg.title, DEFAULT_TITLE);
    }

    #[test]
    fn pitch_and_margin_clamped() {
        let pdf = PdfConfig::default().with_line_pitch(0.0).with_margin(-3.0);
        assert_eq!(pdf.line_pitch_mm, 1.0);
        assert_eq!(pdf.margin_mm, 0.0);
    }
}
