//! serena-export
//!
//! Report documents: rendering, file naming, DOCX and paginated PDF output.

pub mod docx;
pub mod error;
pub mod file_name;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod styles;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use error::ExportError;
use render::{ReportDocument, render_document};
use styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Docx,
    Pdf,
}

/// Render `document` in `format` and write it into `dir` under its
/// download name. Returns the written path.
pub fn export_to_dir(
    document: &ReportDocument,
    format: ExportFormat,
    styles: &DocumentStyles,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let rendered = render_document(document)?;

    let (bytes, file_name) = match format {
        ExportFormat::Docx => (
            docx::generate_docx(&rendered, styles)?,
            file_name::docx_file_name(document.topic, &document.user_name),
        ),
        ExportFormat::Pdf => (
            pdf::generate_pdf(&rendered, "Relatório de Bem-Estar", styles)?,
            file_name::pdf_file_name(document.topic, &document.user_name),
        ),
    };

    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, &bytes)?;

    info!(path = %path.display(), bytes = bytes.len(), ?format, "report exported");
    Ok(path)
}
