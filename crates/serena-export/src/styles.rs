use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text in DOCX output (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings in DOCX output.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title size in points.
    pub heading1_size: usize,

    /// Section heading size in points.
    pub heading2_size: usize,

    /// Sub-section heading size in points.
    pub heading3_size: usize,

    /// Page width in millimetres.
    pub page_width_mm: f32,

    /// Page height in millimetres.
    pub page_height_mm: f32,

    /// Page margin in millimetres (applied uniformly).
    pub margin_mm: f32,

    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        // A4 portrait.
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 22,
            heading2_size: 15,
            heading3_size: 13,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            line_spacing: 1.4,
        }
    }
}
