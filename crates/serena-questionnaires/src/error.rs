use thiserror::Error;

use crate::question::AnswerError;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),

    #[error("unknown question '{key}' for topic '{topic}'")]
    UnknownQuestion { topic: String, key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
