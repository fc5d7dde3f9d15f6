//! Line classification shared by the DOCX and PDF writers.
//!
//! The rendered report uses a small subset of Markdown:
//! - `# Heading`, `## Heading`, `### Heading` → headings
//! - a whole line wrapped in `**` → section heading
//! - `- item`, `* item`, `• item` → bullet item
//! - `1. item` → numbered item
//! - `---` → separator rule
//! - blank line → vertical space
//! - everything else → paragraph
//!
//! Inside a line, `**bold**` runs are kept as [`Span`]s.

/// One classified line of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Bullet(String),
    Numbered { number: String, text: String },
    Paragraph(String),
    Rule,
    Blank,
}

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// Classify every line of `rendered`.
pub fn parse_blocks(rendered: &str) -> Vec<Block> {
    rendered.lines().map(classify).collect()
}

fn classify(line: &str) -> Block {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }
    if trimmed == "---" {
        return Block::Rule;
    }

    if let Some(text) = trimmed.strip_prefix("### ") {
        return heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return heading(2, text);
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return heading(1, text);
    }
    if trimmed.len() > 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return heading(2, &trimmed.replace("**", ""));
    }

    for marker in ["- ", "* ", "• "] {
        if let Some(text) = trimmed.strip_prefix(marker) {
            return Block::Bullet(text.trim_start().to_string());
        }
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0
        && let Some(text) = trimmed[digits..].strip_prefix('.')
    {
        return Block::Numbered {
            number: trimmed[..digits].to_string(),
            text: text.trim_start().to_string(),
        };
    }

    Block::Paragraph(trimmed.to_string())
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.trim().to_string(),
    }
}

/// Split `**bold**` runs out of a line. An unclosed `**` is kept as text.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        push_span(&mut spans, &remaining[..start], false);
        push_span(&mut spans, &after_start[..end], true);
        remaining = &after_start[end + 2..];
    }

    push_span(&mut spans, remaining, false);
    spans
}

fn push_span(spans: &mut Vec<Span>, text: &str, bold: bool) {
    if !text.is_empty() {
        spans.push(Span {
            text: text.to_string(),
            bold,
        });
    }
}

/// The text of a line with inline markers removed.
pub fn plain_text(text: &str) -> String {
    parse_inline(text).into_iter().map(|s| s.text).collect()
}
