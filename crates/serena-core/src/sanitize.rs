//! Lightweight markup cleanup for generated report text.
//!
//! The rules run in a fixed order, each as a single non-recursive regex
//! replacement over the whole text:
//!
//! 1. `**bold**` → `bold`
//! 2. `*italic*` → `italic`
//! 3. leading `#`s (and following spaces) at line start are removed
//! 4. `` `code` `` → `code`
//! 5. a leading `- ` list marker becomes `• `
//! 6. runs of two or more newlines collapse to exactly one blank line
//! 7. surrounding whitespace is trimmed
//!
//! This is not a markup parser. A lone `*` survives (`5 * 3`), but two on
//! one line are taken as italics (`2 * 3 * 4` becomes `2  3  4`), and
//! `***x***` only comes out as `x` because rule 2 runs after rule 1.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));
static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#+[ \t]*"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`(.*?)`"));
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^-[ \t]+"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{2,}"));

/// Bullet glyph that replaces `- ` list markers.
pub const BULLET: &str = "• ";

/// Strip lightweight markup from generated text, producing display-ready text.
pub fn sanitize(raw: &str) -> String {
    let text = BOLD.replace_all(raw, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = LIST_MARKER.replace_all(&text, BULLET);
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// # Panics
///
/// Panics if the pattern is invalid. Only called with the constant patterns
/// above, so a panic indicates a typo in this file.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid sanitize pattern '{pattern}': {e}"))
}
