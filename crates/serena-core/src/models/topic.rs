use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four wellness domains a questionnaire and report cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    MentalHealth,
    Sleep,
    Diet,
    Activity,
}

impl Topic {
    /// The topic a fresh or reset session starts on.
    pub const DEFAULT: Topic = Topic::MentalHealth;

    pub const ALL: [Topic; 4] = [Topic::MentalHealth, Topic::Sleep, Topic::Diet, Topic::Activity];

    /// Stable identifier, identical to the serde tag (e.g. `mentalHealth`).
    pub fn key(self) -> &'static str {
        match self {
            Topic::MentalHealth => "mentalHealth",
            Topic::Sleep => "sleep",
            Topic::Diet => "diet",
            Topic::Activity => "activity",
        }
    }

    /// Heading shown above the questionnaire.
    pub fn form_title(self) -> &'static str {
        match self {
            Topic::MentalHealth => "Saúde Mental e Estresse",
            Topic::Sleep => "Qualidade do Sono",
            Topic::Diet => "Hábitos Alimentares",
            Topic::Activity => "Atividade Física",
        }
    }

    /// Title the generated report is asked to carry.
    pub fn report_title(self) -> &'static str {
        match self {
            Topic::MentalHealth => "Saúde Mental e Estresse",
            Topic::Sleep => "Qualidade do Sono",
            Topic::Diet => "Alimentação",
            Topic::Activity => "Atividade Física",
        }
    }
}

impl Default for Topic {
    fn default() -> Self {
        Topic::DEFAULT
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownTopic(s.to_string()))
    }
}
