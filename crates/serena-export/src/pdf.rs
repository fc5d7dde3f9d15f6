//! Multi-page PDF output.
//!
//! The report is first laid out on one continuous canvas as wide as a page
//! and as tall as the content needs. The canvas is then cut into pages with
//! [`page_offsets`]: the first page shows it from the top, and every further
//! page shifts it up by one more page height, for as long as content
//! remains below the previous page.
//!
//! Text uses the builtin Helvetica faces, so no font files are embedded.
//! Widths are estimated from an average glyph width rather than measured.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::error::ExportError;
use crate::layout::{Block, parse_blocks, plain_text};
use crate::styles::DocumentStyles;

const PT_TO_MM: f32 = 0.352_778;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH_EM: f32 = 0.5;

const LIST_INDENT_MM: f32 = 6.0;

/// Vertical offsets of the canvas for each page, in the canvas' units.
///
/// The first page is at offset 0. While the height left after the previous
/// page is still positive, another page is added at `height_left -
/// content_height`, which is `-(k * page_height)` for the k-th extra page.
pub fn page_offsets(content_height: f32, page_height: f32) -> Vec<f32> {
    let mut offsets = vec![0.0];
    if page_height <= 0.0 {
        return offsets;
    }

    let mut height_left = content_height - page_height;
    while height_left > 0.0 {
        offsets.push(height_left - content_height);
        height_left -= page_height;
    }
    offsets
}

/// A line placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Distance from the canvas top to the top of the line, in mm.
    pub top_mm: f32,
    pub x_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
}

/// The report laid out on a single continuous canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub lines: Vec<PlacedLine>,
    pub height_mm: f32,
}

/// Lay out the rendered report on a continuous canvas.
///
/// Lines never straddle a page boundary: a line that would cross into the
/// bottom margin moves to the top of the next page.
pub fn layout_canvas(rendered: &str, styles: &DocumentStyles) -> Canvas {
    let mut cursor = Cursor::new(styles);

    for block in parse_blocks(rendered) {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => styles.heading1_size,
                    2 => styles.heading2_size,
                    _ => styles.heading3_size,
                } as f32;
                cursor.space(size * 0.4);
                cursor.text(&plain_text(&text), size, true, 0.0, "");
                cursor.space(size * 0.2);
            }
            Block::Bullet(text) => {
                cursor.text(&plain_text(&text), styles.body_size as f32, false, LIST_INDENT_MM, "\u{2022} ");
            }
            Block::Numbered { number, text } => {
                let marker = format!("{number}. ");
                cursor.text(&plain_text(&text), styles.body_size as f32, false, LIST_INDENT_MM, &marker);
            }
            Block::Paragraph(text) => {
                cursor.text(&plain_text(&text), styles.body_size as f32, false, 0.0, "");
            }
            Block::Rule => cursor.space(styles.body_size as f32),
            Block::Blank => cursor.space(styles.body_size as f32 * 0.6),
        }
    }

    cursor.finish()
}

struct Cursor<'a> {
    styles: &'a DocumentStyles,
    y: f32,
    lines: Vec<PlacedLine>,
}

impl<'a> Cursor<'a> {
    fn new(styles: &'a DocumentStyles) -> Self {
        Self {
            styles,
            y: styles.margin_mm,
            lines: Vec::new(),
        }
    }

    /// Vertical space given in points.
    fn space(&mut self, size_pt: f32) {
        self.y += size_pt * PT_TO_MM;
    }

    fn text(&mut self, text: &str, size_pt: f32, bold: bool, indent_mm: f32, marker: &str) {
        let styles = self.styles;
        let usable = styles.page_width_mm - 2.0 * styles.margin_mm - indent_mm;
        let glyph_mm = size_pt * PT_TO_MM * AVG_GLYPH_WIDTH_EM;
        let max_chars = ((usable / glyph_mm) as usize).max(1);
        let marker_chars = marker.chars().count();

        let wrapped = wrap(text, max_chars.saturating_sub(marker_chars).max(1));
        for (i, line) in wrapped.into_iter().enumerate() {
            let text = if i == 0 {
                format!("{marker}{line}")
            } else {
                format!("{}{line}", " ".repeat(marker_chars))
            };
            self.place(text, size_pt, bold, styles.margin_mm + indent_mm);
        }
    }

    fn place(&mut self, text: String, size_pt: f32, bold: bool, x_mm: f32) {
        let styles = self.styles;
        let line_height = size_pt * PT_TO_MM * styles.line_spacing;
        let page = styles.page_height_mm;
        let page_index = (self.y / page).floor();
        let page_top = page_index * page;
        if self.y < page_top + styles.margin_mm {
            // spacing carried over a page break
            self.y = page_top + styles.margin_mm;
        }
        let usable_bottom = page_top + page - styles.margin_mm;
        if self.y + line_height > usable_bottom {
            self.y = page_top + page + styles.margin_mm;
        }

        self.lines.push(PlacedLine {
            text,
            top_mm: self.y,
            x_mm,
            size_pt,
            bold,
        });
        self.y += line_height;
    }

    fn finish(self) -> Canvas {
        Canvas {
            height_mm: self.y + self.styles.margin_mm,
            lines: self.lines,
        }
    }
}

/// Greedy word wrap to at most `max_chars` characters per line. Words longer
/// than a line are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max_chars && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Generate PDF bytes for the rendered report.
pub fn generate_pdf(rendered: &str, title: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let canvas = layout_canvas(rendered, styles);
    let page_height = styles.page_height_mm;
    let offsets = page_offsets(canvas.height_mm, page_height);
    debug!(
        lines = canvas.lines.len(),
        canvas_height_mm = canvas.height_mm,
        pages = offsets.len(),
        "laid out PDF"
    );

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(styles.page_width_mm),
        Mm(page_height),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, offset) in offsets.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(styles.page_width_mm), Mm(page_height), "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);

        for line in &canvas.lines {
            let top_on_page = line.top_mm + offset;
            if !(0.0..page_height).contains(&top_on_page) {
                continue;
            }
            // PDF y grows upwards from the bottom edge; place the baseline
            // one font size below the line top.
            let baseline = page_height - top_on_page - line.size_pt * PT_TO_MM;
            let font: &IndirectFontRef = if line.bold { &bold } else { &regular };
            layer.use_text(line.text.as_str(), line.size_pt, Mm(line.x_mm), Mm(baseline), font);
        }
    }

    let bytes = doc.save_to_bytes()?;
    Ok(bytes)
}
