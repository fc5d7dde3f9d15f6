use serena_core::models::form::{DietForm, FormData};
use serena_core::models::request::ReportRequest;
use serena_core::models::topic::Topic;

#[test]
fn defaults_match_topic_and_have_empty_name() {
    for topic in Topic::ALL {
        let form = FormData::defaults(topic);
        assert_eq!(form.topic(), topic);
        assert_eq!(form.name(), "");
    }
}

#[test]
fn deserializes_partial_answers_with_defaults() {
    let json = r#"{"topic": "diet", "name": "Ana", "mealsPerDay": "Mais de 3"}"#;
    let form: FormData = serde_json::from_str(json).unwrap();

    let FormData::Diet(diet) = form else {
        panic!("expected a diet form");
    };
    assert_eq!(diet.name, "Ana");
    assert_eq!(diet.meals_per_day, "Mais de 3");
    assert_eq!(diet.alcohol_frequency, DietForm::default().alcohol_frequency);
}

#[test]
fn serializes_with_topic_tag_and_camel_case_fields() {
    let value = serde_json::to_value(FormData::defaults(Topic::MentalHealth)).unwrap();
    assert_eq!(value["topic"], "mentalHealth");
    assert_eq!(value["stressFrequency"], "Às vezes");
    assert_eq!(value["mood"], 3);
}

#[test]
fn request_requires_non_blank_name() {
    let mut form = FormData::defaults(Topic::Sleep);
    assert!(ReportRequest::new(form.clone()).is_err());

    form.set_name("   ");
    assert!(ReportRequest::new(form.clone()).is_err());

    form.set_name("  Bia ");
    let request = ReportRequest::new(form).unwrap();
    assert_eq!(request.topic(), Topic::Sleep);
    assert_eq!(request.user_name(), "Bia");
}

#[test]
fn topic_parses_from_key() {
    assert_eq!("mentalHealth".parse::<Topic>().unwrap(), Topic::MentalHealth);
    assert_eq!("DIET".parse::<Topic>().unwrap(), Topic::Diet);
    assert!("nutrition".parse::<Topic>().is_err());
    assert_eq!(Topic::default(), Topic::MentalHealth);
}
