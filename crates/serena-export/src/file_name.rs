//! Download file names.
//!
//! `Relatorio_Bem_Estar_{topic}_{name}` with diacritics stripped and every
//! character outside `[A-Za-z0-9_]` replaced by `_`, so "Relatório" for
//! "João Araújo" on sleep becomes `Relatorio_Bem_Estar_sleep_Joao_Araujo`.

use unicode_normalization::UnicodeNormalization;

use serena_core::models::topic::Topic;

/// Combining diacritical marks, dropped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Make `text` safe for use as a file name.
pub fn sanitize_file_name(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Base name (no extension) for a report export.
pub fn base_name(topic: Topic, user_name: &str) -> String {
    sanitize_file_name(&format!("Relatorio_Bem_Estar_{}_{user_name}", topic.key()))
}

pub fn pdf_file_name(topic: Topic, user_name: &str) -> String {
    format!("{}.pdf", base_name(topic, user_name))
}

pub fn docx_file_name(topic: Topic, user_name: &str) -> String {
    format!("{}.docx", base_name(topic, user_name))
}
