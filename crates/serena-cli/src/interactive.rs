//! The terminal questionnaire.
//!
//! One loop per report: pick a topic, answer its questions, read the
//! report, then export, start over, or quit.

use std::path::Path;

use eyre::Result;
use inquire::{InquireError, Select, Text};
use serde_json::{Map, Value};

use serena_cli::backend::Backend;
use serena_cli::config::{self, SerenaConfig};
use serena_core::models::form::FormData;
use serena_core::models::topic::Topic;
use serena_export::ExportFormat;
use serena_questionnaires::question::QuestionKind;
use serena_questionnaires::{answers_to_form, questionnaire_for};
use serena_session::error::SessionError;
use serena_session::{Session, SessionState};

use crate::commands;

const DOWNLOAD_PDF: &str = "Baixar PDF";
const DOWNLOAD_DOCX: &str = "Baixar DOCX";
const START_OVER: &str = "Começar de novo";
const RETRY: &str = "Tentar novamente";
const QUIT: &str = "Sair";

pub async fn run(config_path: &Path) -> Result<()> {
    let config = config::load_or_default(config_path)?;
    let backend = Backend::from_config(&config, config::api_key_from_env().as_deref()).await?;

    match session_loop(&config, &backend).await {
        Err(e) if cancelled(&e) => Ok(()),
        other => other,
    }
}

fn cancelled(err: &eyre::Report) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

async fn session_loop(config: &SerenaConfig, backend: &Backend) -> Result<()> {
    let mut session = Session::new();

    loop {
        let topic = choose_topic(session.topic())?;
        session.select_topic(topic)?;

        let questionnaire = questionnaire_for(topic);
        println!("\n{}\n", questionnaire.title());
        let mut name = Text::new("Seu nome:").prompt()?;
        let answers = ask_answers(topic)?;

        loop {
            let form = answers_to_form(topic, &name, answers.clone())?;
            println!("\nGerando seu relatório...");
            match session.generate(backend, form).await {
                Ok(_) => break,
                Err(SessionError::Validation(message)) => {
                    println!("{message}");
                    name = Text::new("Seu nome:").prompt()?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let next = match session.state() {
            SessionState::Report { content, .. } => {
                println!("\n{content}\n");
                report_menu(&session, config)?
            }
            SessionState::Error { message, .. } => {
                println!("\nOps! Algo deu errado.\n{message}\n");
                Select::new("O que deseja fazer?", vec![RETRY, QUIT]).prompt()?
            }
            other => eyre::bail!("generation ended in unexpected state {}", other.kind()),
        };

        if next == QUIT {
            return Ok(());
        }
        session.reset();
    }
}

/// Offer exports until the user starts over or quits; returns that choice.
fn report_menu(session: &Session, config: &SerenaConfig) -> Result<&'static str> {
    let dir = config.output_dir();
    loop {
        let choice = Select::new(
            "O que deseja fazer?",
            vec![DOWNLOAD_PDF, DOWNLOAD_DOCX, START_OVER, QUIT],
        )
        .prompt()?;

        let format = match choice {
            DOWNLOAD_PDF => ExportFormat::Pdf,
            DOWNLOAD_DOCX => ExportFormat::Docx,
            other => return Ok(other),
        };
        if let Some(path) = commands::export(session, format, &dir)? {
            println!("Arquivo salvo em {}", path.display());
        }
    }
}

fn choose_topic(current: Topic) -> Result<Topic> {
    let titles: Vec<&str> = Topic::ALL.iter().map(|t| t.form_title()).collect();
    let start = Topic::ALL.iter().position(|t| *t == current).unwrap_or(0);
    let choice = Select::new("Sobre o que você quer falar hoje?", titles)
        .with_starting_cursor(start)
        .raw_prompt()?;
    Ok(Topic::ALL[choice.index])
}

/// Ask every question of `topic`, preselecting its default answer.
fn ask_answers(topic: Topic) -> Result<Map<String, Value>> {
    let defaults = serde_json::to_value(FormData::defaults(topic))?;
    let mut answers = Map::new();

    for question in questionnaire_for(topic).questions() {
        let default = defaults.get(question.key);
        let value = match question.kind {
            QuestionKind::Choice { options } => {
                let start = default
                    .and_then(Value::as_str)
                    .and_then(|d| options.iter().position(|o| *o == d))
                    .unwrap_or(0);
                let choice = Select::new(question.label, options.to_vec())
                    .with_starting_cursor(start)
                    .prompt()?;
                Value::from(choice)
            }
            QuestionKind::FreeText { placeholder } => {
                let mut prompt = Text::new(question.label).with_placeholder(placeholder);
                if let Some(d) = default.and_then(Value::as_str).filter(|d| !d.is_empty()) {
                    prompt = prompt.with_default(d);
                }
                Value::from(prompt.prompt()?)
            }
            QuestionKind::Rating { min, max } => {
                let scale: Vec<u8> = (min..=max).collect();
                let start = default
                    .and_then(Value::as_u64)
                    .and_then(|d| scale.iter().position(|v| u64::from(*v) == d))
                    .unwrap_or(0);
                let choice = Select::new(question.label, scale)
                    .with_starting_cursor(start)
                    .prompt()?;
                Value::from(choice)
            }
        };
        answers.insert(question.key.to_string(), value);
    }

    Ok(answers)
}
