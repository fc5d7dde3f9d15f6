use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use serena_core::models::topic::Topic;

/// Shown when a questionnaire is submitted without a name.
pub const NAME_REQUIRED_MESSAGE: &str = "Por favor, insira seu nome para personalizar o relatório.";

/// Shown for every failed generation, whatever the underlying cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Ocorreu um erro ao gerar seu relatório. \
Por favor, verifique sua chave de API e tente novamente.";

/// Where the session is, with exactly the data that state needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Filling in the questionnaire for `topic`.
    Form {
        topic: Topic,
        validation_error: Option<String>,
    },
    /// One report request is outstanding.
    Loading {
        request_id: Uuid,
        topic: Topic,
        user_name: String,
    },
    Report {
        topic: Topic,
        user_name: String,
        content: String,
    },
    Error {
        topic: Topic,
        message: String,
    },
}

impl SessionState {
    pub fn initial() -> Self {
        SessionState::Form {
            topic: Topic::DEFAULT,
            validation_error: None,
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            SessionState::Form { .. } => StateKind::Form,
            SessionState::Loading { .. } => StateKind::Loading,
            SessionState::Report { .. } => StateKind::Report,
            SessionState::Error { .. } => StateKind::Error,
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            SessionState::Form { topic, .. }
            | SessionState::Loading { topic, .. }
            | SessionState::Report { topic, .. }
            | SessionState::Error { topic, .. } => *topic,
        }
    }

    /// The user's name; empty outside `Loading` and `Report`.
    pub fn user_name(&self) -> &str {
        match self {
            SessionState::Loading { user_name, .. } | SessionState::Report { user_name, .. } => {
                user_name
            }
            SessionState::Form { .. } | SessionState::Error { .. } => "",
        }
    }

    /// The sanitized report text; only present in `Report`.
    pub fn report_content(&self) -> Option<&str> {
        match self {
            SessionState::Report { content, .. } => Some(content),
            _ => None,
        }
    }

    /// The user-facing message; the validation message in `Form`, the
    /// failure message in `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionState::Form {
                validation_error, ..
            } => validation_error.as_deref(),
            SessionState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// The four states, without their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    Form,
    Loading,
    Report,
    Error,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Form => "form",
            StateKind::Loading => "loading",
            StateKind::Report => "report",
            StateKind::Error => "error",
        };
        f.write_str(name)
    }
}
