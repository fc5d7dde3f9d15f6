use serde::Serialize;
use thiserror::Error;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// One of a fixed list of options.
    Choice { options: &'static [&'static str] },
    /// Arbitrary text, possibly empty.
    FreeText { placeholder: &'static str },
    /// Integer slider, both ends inclusive.
    Rating { min: u8, max: u8 },
}

/// A single question within a topic's questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// camelCase key, identical to the form field it fills.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: QuestionKind::Choice { options },
        }
    }

    pub const fn free_text(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            kind: QuestionKind::FreeText { placeholder },
        }
    }

    pub const fn rating(key: &'static str, label: &'static str, min: u8, max: u8) -> Self {
        Self {
            key,
            label,
            kind: QuestionKind::Rating { min, max },
        }
    }

    /// Check a single answer. `None` means the answer is acceptable.
    pub fn check(&self, value: &serde_json::Value) -> Option<AnswerError> {
        let accepted = match self.kind {
            QuestionKind::FreeText { .. } => value.is_string(),
            QuestionKind::Choice { options } => value
                .as_str()
                .is_some_and(|v| options.contains(&v)),
            QuestionKind::Rating { min, max } => value
                .as_u64()
                .is_some_and(|v| (u64::from(min)..=u64::from(max)).contains(&v)),
        };

        if accepted {
            return None;
        }

        let expected = match self.kind {
            QuestionKind::FreeText { .. } => "text".to_string(),
            QuestionKind::Choice { options } => format!("one of [{}]", options.join(", ")),
            QuestionKind::Rating { min, max } => format!("an integer in [{min}, {max}]"),
        };

        Some(AnswerError {
            key: self.key.to_string(),
            value: value.clone(),
            message: format!("{}: got {value}, expected {expected}", self.label),
        })
    }
}

#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
pub struct AnswerError {
    pub key: String,
    pub value: serde_json::Value,
    pub message: String,
}
