use serde::Serialize;
use tera::{Context, Tera};

use serena_core::models::topic::Topic;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "report";

/// The printed report region: title block, then the report text.
const DOCUMENT_TEMPLATE: &str = "\
# Relatório de Bem-Estar
Personalizado para {{ user_name }}
Gerado em: {{ generated_on }}

---

{{ content }}
";

/// A finished report, ready to be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub topic: Topic,
    pub user_name: String,
    /// Sanitized report text.
    pub content: String,
    pub generated_on: jiff::civil::Date,
}

impl ReportDocument {
    /// A document dated today in the system time zone.
    pub fn dated_today(topic: Topic, user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            topic,
            user_name: user_name.into(),
            content: content.into(),
            generated_on: jiff::Zoned::now().date(),
        }
    }
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    user_name: &'a str,
    generated_on: String,
    content: &'a str,
}

/// Render the report region as Markdown-ish text.
pub fn render_document(document: &ReportDocument) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, DOCUMENT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(DocumentContext {
        user_name: &document.user_name,
        generated_on: document.generated_on.strftime("%d/%m/%Y").to_string(),
        content: &document.content,
    })?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}
