use serena_core::models::topic::Topic;

use crate::question::Question;
use crate::Questionnaire;

/// Eating habits.
pub struct Diet;

const QUESTIONS: &[Question] = &[
    Question::choice(
        "mealsPerDay",
        "Quantas refeições completas você faz por dia?",
        &["1", "2", "3", "Mais de 3"],
    ),
    Question::choice(
        "skipBreakfast",
        "Você costuma pular o café da manhã?",
        &["Não", "Sim"],
    ),
    Question::choice(
        "processedFoodFrequency",
        "Quantas vezes por semana você come alimentos ultraprocessados (ex: fast food)?",
        &["Raramente", "1-2 vezes", "3-4 vezes", "Quase todo dia"],
    ),
    Question::choice(
        "waterIntake",
        "Você bebe água regularmente ao longo do dia?",
        &["Sim", "Não", "Preciso melhorar"],
    ),
    Question::choice(
        "fruitAndVeg",
        "Costuma incluir frutas, legumes e verduras nas refeições?",
        &["Sim", "Não", "Às vezes"],
    ),
    Question::choice(
        "alcoholFrequency",
        "Ingere bebidas alcoólicas? Com que frequência?",
        &["Não bebo", "Raramente", "Fins de semana", "Frequentemente"],
    ),
];

impl Questionnaire for Diet {
    fn topic(&self) -> Topic {
        Topic::Diet
    }

    fn questions(&self) -> &'static [Question] {
        QUESTIONS
    }
}
