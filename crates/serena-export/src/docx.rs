use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::layout::{Block, parse_blocks, parse_inline};
use crate::styles::DocumentStyles;

/// Generate a DOCX document from the rendered report.
///
/// See [`crate::layout`] for the line syntax understood here. Separator
/// rules become an empty paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for block in parse_blocks(rendered) {
        let paragraph = match block {
            Block::Heading { level, text } => heading_paragraph(&text, level, styles),
            Block::Bullet(text) => list_paragraph("\u{2022} ", &text, styles),
            Block::Numbered { number, text } => list_paragraph(&format!("{number}. "), &text, styles),
            Block::Paragraph(text) => body_paragraph(&text, styles),
            Block::Rule | Block::Blank => Paragraph::new(),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, level: u8, styles: &DocumentStyles) -> Paragraph {
    let style_id = match level {
        1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    };
    let mut para = Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    );
    if level == 1 {
        para = para.align(AlignmentType::Center);
    }
    para
}

fn list_paragraph(marker: &str, text: &str, styles: &DocumentStyles) -> Paragraph {
    let marker_run = Run::new()
        .add_text(marker)
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .indent(Some(360), None, None, None)
        .add_run(marker_run);

    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in inline_runs(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    parse_inline(text)
        .into_iter()
        .map(|span| {
            let run = Run::new()
                .add_text(&span.text)
                .size(styles.body_size * 2)
                .fonts(RunFonts::new().ascii(&styles.body_font));
            if span.bold { run.bold() } else { run }
        })
        .collect()
}
