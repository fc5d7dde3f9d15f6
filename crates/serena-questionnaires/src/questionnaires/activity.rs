use serena_core::models::topic::Topic;

use crate::question::Question;
use crate::Questionnaire;

/// Physical activity and sedentary time.
pub struct Activity;

const QUESTIONS: &[Question] = &[
    Question::free_text(
        "physicalActivity",
        "Você pratica alguma atividade física? Qual e com que frequência?",
        "Ex: Nenhuma, caminhada 3x por semana...",
    ),
    Question::choice(
        "movementMinutes",
        "Quantos minutos por dia você se movimenta (ex: caminhada, escadas, etc.)?",
        &["Menos de 30 minutos", "30-60 minutos", "Mais de 60 minutos"],
    ),
    Question::choice(
        "isSedentary",
        "Você trabalha ou estuda sentado(a) por longos períodos?",
        &["Sim", "Não"],
    ),
    Question::choice(
        "hasMusclePain",
        "Sente dores musculares ou posturais com frequência?",
        &["Não", "Às vezes", "Sim"],
    ),
];

impl Questionnaire for Activity {
    fn topic(&self) -> Topic {
        Topic::Activity
    }

    fn questions(&self) -> &'static [Question] {
        QUESTIONS
    }
}
