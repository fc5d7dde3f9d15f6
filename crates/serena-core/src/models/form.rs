use serde::{Deserialize, Serialize};

use super::topic::Topic;

/// Answers to the questionnaire of one topic.
///
/// Serialized with a `topic` tag and camelCase field names, so a JSON
/// answers file looks like `{"topic": "diet", "name": "Ana", "mealsPerDay": "3"}`.
/// Fields missing from the input take the questionnaire defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", rename_all = "camelCase")]
pub enum FormData {
    MentalHealth(MentalHealthForm),
    Sleep(SleepForm),
    Diet(DietForm),
    Activity(ActivityForm),
}

impl FormData {
    /// A fresh form for `topic` with every answer at its default and an
    /// empty name. Answers are never carried over between topics.
    pub fn defaults(topic: Topic) -> Self {
        match topic {
            Topic::MentalHealth => FormData::MentalHealth(MentalHealthForm::default()),
            Topic::Sleep => FormData::Sleep(SleepForm::default()),
            Topic::Diet => FormData::Diet(DietForm::default()),
            Topic::Activity => FormData::Activity(ActivityForm::default()),
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            FormData::MentalHealth(_) => Topic::MentalHealth,
            FormData::Sleep(_) => Topic::Sleep,
            FormData::Diet(_) => Topic::Diet,
            FormData::Activity(_) => Topic::Activity,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormData::MentalHealth(f) => &f.name,
            FormData::Sleep(f) => &f.name,
            FormData::Diet(f) => &f.name,
            FormData::Activity(f) => &f.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            FormData::MentalHealth(f) => f.name = name,
            FormData::Sleep(f) => f.name = name,
            FormData::Diet(f) => f.name = name,
            FormData::Activity(f) => f.name = name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MentalHealthForm {
    pub name: String,
    pub stress_frequency: String,
    /// Free text.
    pub stress_source: String,
    pub leisure_time: String,
    pub relaxation_techniques: String,
    /// General mood over the last days, 1 (bad) to 5 (excellent).
    pub mood: u8,
}

impl Default for MentalHealthForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            stress_frequency: "Às vezes".to_string(),
            stress_source: String::new(),
            leisure_time: "Sim".to_string(),
            relaxation_techniques: "Não".to_string(),
            mood: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SleepForm {
    pub name: String,
    pub sleep_hours: String,
    pub sleep_difficulty: String,
    pub phone_before_bed: String,
    pub waking_up_rested: String,
    pub regular_schedule: String,
}

impl Default for SleepForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sleep_hours: "7-8 horas".to_string(),
            sleep_difficulty: "Não".to_string(),
            phone_before_bed: "Sim".to_string(),
            waking_up_rested: "Às vezes".to_string(),
            regular_schedule: "Não".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DietForm {
    pub name: String,
    pub meals_per_day: String,
    pub skip_breakfast: String,
    pub processed_food_frequency: String,
    pub water_intake: String,
    pub fruit_and_veg: String,
    pub alcohol_frequency: String,
}

impl Default for DietForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            meals_per_day: "3".to_string(),
            skip_breakfast: "Não".to_string(),
            processed_food_frequency: "1-2 vezes".to_string(),
            water_intake: "Sim".to_string(),
            fruit_and_veg: "Sim".to_string(),
            alcohol_frequency: "Raramente".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityForm {
    pub name: String,
    /// Free text: which activity and how often.
    pub physical_activity: String,
    pub movement_minutes: String,
    pub is_sedentary: String,
    pub has_muscle_pain: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            physical_activity: String::new(),
            movement_minutes: "30-60 minutos".to_string(),
            is_sedentary: "Sim".to_string(),
            has_muscle_pain: "Às vezes".to_string(),
        }
    }
}
