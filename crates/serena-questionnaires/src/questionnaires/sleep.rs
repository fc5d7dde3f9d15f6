use serena_core::models::topic::Topic;

use crate::question::Question;
use crate::Questionnaire;

/// Sleep habits and sleep hygiene.
pub struct Sleep;

const QUESTIONS: &[Question] = &[
    Question::choice(
        "sleepHours",
        "Em média, quantas horas você dorme por noite?",
        &["Menos de 5 horas", "5-6 horas", "7-8 horas", "Mais de 8 horas"],
    ),
    Question::choice(
        "sleepDifficulty",
        "Você tem dificuldade para dormir ou acordar?",
        &["Não", "Às vezes", "Sim"],
    ),
    Question::choice(
        "phoneBeforeBed",
        "Costuma usar o celular antes de dormir?",
        &["Sim", "Não"],
    ),
    Question::choice(
        "wakingUpRested",
        "Acorda se sentindo descansado(a)?",
        &["Sempre", "Às vezes", "Raramente"],
    ),
    Question::choice(
        "regularSchedule",
        "Você mantém horários regulares de sono mesmo nos fins de semana?",
        &["Sim", "Não"],
    ),
];

impl Questionnaire for Sleep {
    fn topic(&self) -> Topic {
        Topic::Sleep
    }

    fn questions(&self) -> &'static [Question] {
        QUESTIONS
    }
}
