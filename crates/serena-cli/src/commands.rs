//! Non-interactive subcommands.

use std::path::{Path, PathBuf};

use eyre::Result;

use serena_cli::backend::Backend;
use serena_cli::config::{self, ProviderConfig, SerenaConfig};
use serena_core::models::form::FormData;
use serena_core::models::request::ReportRequest;
use serena_export::render::ReportDocument;
use serena_export::styles::DocumentStyles;
use serena_export::{ExportFormat, export_to_dir};
use serena_genai::prompt::build_prompt;
use serena_questionnaires::question::QuestionKind;
use serena_questionnaires::{all_questionnaires, questionnaire_for};
use serena_session::{Session, SessionState};

/// Read a questionnaire from a JSON answers file and check its answers.
pub fn read_form(path: &Path) -> Result<FormData> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    let form: FormData = serde_json::from_str(&contents)?;

    let errors = questionnaire_for(form.topic()).validate(&form);
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        eyre::bail!("invalid answers in {}:\n  {}", path.display(), messages.join("\n  "));
    }
    Ok(form)
}

/// Export the session's report into `dir`. `None` when there is no report.
pub fn export(session: &Session, format: ExportFormat, dir: &Path) -> Result<Option<PathBuf>> {
    let Some(target) = session.export_target() else {
        return Ok(None);
    };
    let document = ReportDocument::dated_today(target.topic, target.user_name, target.content);
    let path = export_to_dir(&document, format, &DocumentStyles::default(), dir)?;
    Ok(Some(path))
}

pub async fn generate(
    config_path: &Path,
    answers: &Path,
    pdf: bool,
    docx: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_or_default(config_path)?;
    let form = read_form(answers)?;
    let backend = Backend::from_config(&config, config::api_key_from_env().as_deref()).await?;

    let mut session = Session::new();
    session.select_topic(form.topic())?;
    session.generate(&backend, form).await?;

    match session.state() {
        SessionState::Report { content, .. } => println!("{content}"),
        SessionState::Error { message, .. } => eyre::bail!("{message}"),
        other => eyre::bail!("generation ended in unexpected state {}", other.kind()),
    }

    let dir = out.unwrap_or_else(|| config.output_dir());
    let formats = [(pdf, ExportFormat::Pdf), (docx, ExportFormat::Docx)];
    for (_, format) in formats.into_iter().filter(|(wanted, _)| *wanted) {
        if let Some(path) = export(&session, format, &dir)? {
            eprintln!("Arquivo salvo em {}", path.display());
        }
    }
    Ok(())
}

pub fn topics() -> Result<()> {
    for questionnaire in all_questionnaires() {
        println!("{} ({})", questionnaire.title(), questionnaire.topic().key());
        for question in questionnaire.questions() {
            let answers = match question.kind {
                QuestionKind::Choice { options } => options.join(" | "),
                QuestionKind::FreeText { .. } => "texto livre".to_string(),
                QuestionKind::Rating { min, max } => format!("{min} a {max}"),
            };
            println!("  {}: {}", question.key, question.label);
            println!("      {answers}");
        }
        println!();
    }
    Ok(())
}

pub fn prompt(answers: &Path) -> Result<()> {
    let form = read_form(answers)?;
    let request = ReportRequest::new(form)?;
    println!("{}", build_prompt(&request));
    Ok(())
}

pub fn config_show(config_path: &Path) -> Result<()> {
    let config = config::load_or_default(config_path)?;
    let api_key = config::api_key_from_env();
    let info = config::config_info(config_path, &config, api_key.as_deref());
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

pub fn config_init(
    config_path: &Path,
    provider: ProviderConfig,
    model: Option<String>,
    output_dir: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    if config_path.exists() && !force {
        eyre::bail!(
            "config already exists at {}; pass --force to overwrite",
            config_path.display()
        );
    }

    let model = model.unwrap_or_else(|| provider.default_model().to_string());
    let config = SerenaConfig {
        provider,
        model,
        output_dir,
        ..SerenaConfig::default()
    };
    config::save_config(config_path, &config)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
