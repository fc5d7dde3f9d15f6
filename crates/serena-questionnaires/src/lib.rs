//! serena-questionnaires
//!
//! Question sets for each wellness topic. Pure data, no network access.
//! Defines the labels, answer kinds, and option lists shown to the user,
//! and checks a filled form against them.

pub mod error;
pub mod question;
pub mod questionnaires;

use serde_json::{Map, Value};

use serena_core::models::form::FormData;
use serena_core::models::topic::Topic;

use error::QuestionnaireError;
use question::{AnswerError, Question};

/// Trait implemented by each topic's questionnaire.
pub trait Questionnaire: Send + Sync {
    fn topic(&self) -> Topic;

    /// Heading shown above the questions.
    fn title(&self) -> &'static str {
        self.topic().form_title()
    }

    /// The questions in display order. The name is asked separately.
    fn questions(&self) -> &'static [Question];

    fn question(&self, key: &str) -> Option<&'static Question> {
        self.questions().iter().find(|q| q.key == key)
    }

    /// Check every answer of `form` against this questionnaire.
    ///
    /// A form of another topic yields no errors; callers pick the
    /// questionnaire with [`questionnaire_for`].
    fn validate(&self, form: &FormData) -> Vec<AnswerError> {
        if form.topic() != self.topic() {
            return Vec::new();
        }
        let Ok(Value::Object(fields)) = serde_json::to_value(form) else {
            return Vec::new();
        };

        self.questions()
            .iter()
            .filter_map(|q| fields.get(q.key).and_then(|v| q.check(v)))
            .collect()
    }
}

/// Return all questionnaires, in topic order.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    Topic::ALL.into_iter().map(questionnaire_for).collect()
}

/// Look up the questionnaire for a topic.
pub fn questionnaire_for(topic: Topic) -> Box<dyn Questionnaire> {
    match topic {
        Topic::MentalHealth => Box::new(questionnaires::mental_health::MentalHealth),
        Topic::Sleep => Box::new(questionnaires::sleep::Sleep),
        Topic::Diet => Box::new(questionnaires::diet::Diet),
        Topic::Activity => Box::new(questionnaires::activity::Activity),
    }
}

/// Build a form from answers keyed by question key.
///
/// Unanswered questions keep their defaults. Unknown keys and answers
/// outside a question's options are rejected.
pub fn answers_to_form(
    topic: Topic,
    name: &str,
    answers: Map<String, Value>,
) -> Result<FormData, QuestionnaireError> {
    let questionnaire = questionnaire_for(topic);

    let mut fields = match serde_json::to_value(FormData::defaults(topic))? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };

    for (key, value) in answers {
        let question = questionnaire
            .question(&key)
            .ok_or_else(|| QuestionnaireError::UnknownQuestion {
                topic: topic.key().to_string(),
                key: key.clone(),
            })?;
        if let Some(err) = question.check(&value) {
            return Err(err.into());
        }
        fields.insert(key, value);
    }

    let mut form: FormData = serde_json::from_value(Value::Object(fields))?;
    form.set_name(name);
    Ok(form)
}
