use serde::Serialize;
use uuid::Uuid;

use super::form::FormData;
use super::topic::Topic;
use crate::error::CoreError;

/// A submitted questionnaire, ready to be turned into a prompt.
///
/// The topic is derived from the form variant, so the two can never
/// disagree. Construction is the only place the name is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    id: Uuid,
    form: FormData,
}

impl ReportRequest {
    pub fn new(form: FormData) -> Result<Self, CoreError> {
        if form.name().trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            form,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn topic(&self) -> Topic {
        self.form.topic()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// The name as the user will see it addressed, surrounding whitespace removed.
    pub fn user_name(&self) -> &str {
        self.form.name().trim()
    }
}
