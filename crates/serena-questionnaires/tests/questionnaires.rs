use serde_json::{Map, Value, json};

use serena_core::models::form::FormData;
use serena_core::models::topic::Topic;
use serena_questionnaires::error::QuestionnaireError;
use serena_questionnaires::question::QuestionKind;
use serena_questionnaires::{all_questionnaires, answers_to_form, questionnaire_for};

fn answers(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("answers must be a JSON object"),
    }
}

#[test]
fn every_question_key_is_a_form_field() {
    for questionnaire in all_questionnaires() {
        let form = serde_json::to_value(FormData::defaults(questionnaire.topic())).unwrap();
        for question in questionnaire.questions() {
            assert!(
                form.get(question.key).is_some(),
                "{} has no field {}",
                questionnaire.topic(),
                question.key
            );
        }
    }
}

#[test]
fn defaults_pass_validation() {
    for questionnaire in all_questionnaires() {
        let form = FormData::defaults(questionnaire.topic());
        assert!(questionnaire.validate(&form).is_empty());
    }
}

#[test]
fn choice_outside_options_is_reported() {
    let mut form = FormData::defaults(Topic::Sleep);
    if let FormData::Sleep(sleep) = &mut form {
        sleep.sleep_hours = "12 horas".to_string();
    }

    let errors = questionnaire_for(Topic::Sleep).validate(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "sleepHours");
}

#[test]
fn mood_outside_range_is_reported() {
    let mut form = FormData::defaults(Topic::MentalHealth);
    if let FormData::MentalHealth(mental) = &mut form {
        mental.mood = 9;
    }

    let errors = questionnaire_for(Topic::MentalHealth).validate(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "mood");
}

#[test]
fn mood_question_is_a_one_to_five_rating() {
    let questionnaire = questionnaire_for(Topic::MentalHealth);
    let mood = questionnaire.question("mood").unwrap();
    assert_eq!(mood.kind, QuestionKind::Rating { min: 1, max: 5 });
}

#[test]
fn answers_build_a_form_over_defaults() {
    let form = answers_to_form(
        Topic::Diet,
        "Ana",
        answers(json!({ "mealsPerDay": "2", "skipBreakfast": "Sim" })),
    )
    .unwrap();

    let FormData::Diet(diet) = form else {
        panic!("expected a diet form");
    };
    assert_eq!(diet.name, "Ana");
    assert_eq!(diet.meals_per_day, "2");
    assert_eq!(diet.skip_breakfast, "Sim");
    assert_eq!(diet.water_intake, "Sim");
}

#[test]
fn answers_reject_unknown_keys_and_bad_options() {
    let unknown = answers_to_form(Topic::Activity, "Rui", answers(json!({ "steps": "10k" })));
    assert!(matches!(unknown, Err(QuestionnaireError::UnknownQuestion { .. })));

    let bad = answers_to_form(Topic::Activity, "Rui", answers(json!({ "isSedentary": "Talvez" })));
    assert!(matches!(bad, Err(QuestionnaireError::InvalidAnswer(_))));
}

#[test]
fn free_text_accepts_empty_answers() {
    let form = answers_to_form(
        Topic::Activity,
        "Rui",
        answers(json!({ "physicalActivity": "" })),
    )
    .unwrap();
    assert!(questionnaire_for(Topic::Activity).validate(&form).is_empty());
}
