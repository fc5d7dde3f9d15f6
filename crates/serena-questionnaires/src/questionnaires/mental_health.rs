use serena_core::models::topic::Topic;

use crate::question::Question;
use crate::Questionnaire;

/// Stress and emotional well-being. Mood is rated 1 (bad) to 5 (excellent).
pub struct MentalHealth;

const QUESTIONS: &[Question] = &[
    Question::choice(
        "stressFrequency",
        "Você costuma se sentir estressado(a) ou ansioso(a)?",
        &["Raramente", "Às vezes", "Frequentemente"],
    ),
    Question::free_text(
        "stressSource",
        "O que mais te causa estresse atualmente?",
        "Ex: Trabalho, estudos, família...",
    ),
    Question::choice(
        "leisureTime",
        "Você tem momentos de lazer ou descanso durante a semana?",
        &["Sim", "Não", "Poucos"],
    ),
    Question::choice(
        "relaxationTechniques",
        "Pratica alguma técnica de relaxamento (ex: respiração, meditação, etc)?",
        &["Sim", "Não", "Gostaria de começar"],
    ),
    Question::rating(
        "mood",
        "Como avalia seu humor geral nos últimos dias? (1-Ruim, 5-Excelente)",
        1,
        5,
    ),
];

impl Questionnaire for MentalHealth {
    fn topic(&self) -> Topic {
        Topic::MentalHealth
    }

    fn questions(&self) -> &'static [Question] {
        QUESTIONS
    }
}
