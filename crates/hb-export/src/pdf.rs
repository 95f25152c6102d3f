//! PDF rendering of a sheet layout.
//!
//! Uses the standard Helvetica fonts so no font data is embedded, and
//! writes no timestamps or document IDs: the same blocks always produce
//! the same bytes.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::config::PdfConfig;
use crate::error::ExportResult;
use crate::layout::Block;

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// One laid-out line of text.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    font: &'static str,
    size: u16,
    indent: f32,
    centered: bool,
}

/// Render blocks into a paginated PDF document.
pub fn render_pdf(blocks: &[Block], title: &str, config: &PdfConfig) -> ExportResult<Vec<u8>> {
    let pages = paginate(&lines_for(blocks, config), config);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in &pages {
        let content = Content {
            operations: page_operations(page, config),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(points(config.page_width_mm)),
                Object::Integer(points(config.page_height_mm)),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_text(title)),
        "Producer" => Object::string_literal("Heldenblatt"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
    tracing::debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF");
    Ok(bytes)
}

/// Turn blocks into styled, wrapped lines.
fn lines_for(blocks: &[Block], config: &PdfConfig) -> Vec<Line> {
    let usable = (config.page_width_mm - 2.0 * config.margin_mm) * POINTS_PER_MM;
    let mut lines = Vec::new();

    for block in blocks {
        let (text, font, size, indent, centered) = match block {
            Block::Title(t) => (t.clone(), BOLD, config.title_size, 0.0, true),
            Block::Heading(t) | Block::Subheading(t) => {
                (t.clone(), BOLD, config.body_size, 0.0, false)
            }
            Block::Field { .. } => (block.text(), REGULAR, config.body_size, 0.0, false),
            Block::Item(t) => (format!("- {t}"), REGULAR, config.body_size, 4.0, false),
        };

        let glyph = f32::from(size) * AVERAGE_GLYPH_WIDTH;
        let max_chars = (((usable - indent * POINTS_PER_MM) / glyph).floor() as usize).max(1);
        for piece in wrap(&text, max_chars) {
            lines.push(Line {
                text: piece,
                font,
                size,
                indent,
                centered,
            });
        }

        // Blank line after the title.
        if matches!(block, Block::Title(_)) {
            lines.push(Line {
                text: String::new(),
                font: REGULAR,
                size: config.body_size,
                indent: 0.0,
                centered: false,
            });
        }
    }

    lines
}

/// Split lines into pages; each page holds as many lines as fit between the margins.
fn paginate(lines: &[Line], config: &PdfConfig) -> Vec<Vec<Line>> {
    let usable = config.page_height_mm - 2.0 * config.margin_mm;
    let per_page = ((usable / config.line_pitch_mm).floor() as usize).max(1);

    let mut pages: Vec<Vec<Line>> = lines.chunks(per_page).map(<[Line]>::to_vec).collect();
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

fn page_operations(lines: &[Line], config: &PdfConfig) -> Vec<Operation> {
    let mut ops = Vec::new();
    let top = config.page_height_mm - config.margin_mm;

    for (row, line) in lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        // Baseline sits in the lower third of the line's slot.
        let slot_bottom = top - (row as f32 + 1.0) * config.line_pitch_mm;
        let y = slot_bottom + config.line_pitch_mm * 0.3;

        let x = if line.centered {
            let text_width =
                line.text.chars().count() as f32 * f32::from(line.size) * AVERAGE_GLYPH_WIDTH;
            let page_width = config.page_width_mm * POINTS_PER_MM;
            ((page_width - text_width) / 2.0).max(config.margin_mm * POINTS_PER_MM)
                / POINTS_PER_MM
        } else {
            config.margin_mm + line.indent
        };

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![line.font.into(), Object::Integer(i64::from(line.size))],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Integer(points(x)), Object::Integer(points(y))],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_text(&line.text))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    ops
}

fn points(mm: f32) -> i64 {
    (mm * POINTS_PER_MM).round() as i64
}

/// Encode text for WinAnsiEncoding; characters outside Latin-1 become `?`.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Word-wrap `text` to at most `max_chars` characters per line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        // Hard-split words that can never fit.
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
