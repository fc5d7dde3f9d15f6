use std::sync::Mutex;

use serena_core::models::form::FormData;
use serena_core::models::topic::Topic;
use serena_genai::client::{ReportClient, ReportResult};
use serena_genai::error::GenerationFailed;
use serena_session::error::SessionError;
use serena_session::{
    GENERATION_FAILED_MESSAGE, NAME_REQUIRED_MESSAGE, Session, SessionState, StateKind,
};

/// Replies with a fixed result and records every prompt it receives.
struct ScriptedClient {
    reply: ReportResult,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn replying(reply: ReportResult) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ReportClient for ScriptedClient {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> ReportResult {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

fn named_form(topic: Topic, name: &str) -> FormData {
    let mut form = FormData::defaults(topic);
    form.set_name(name);
    form
}

#[test]
fn starts_in_form_on_default_topic() {
    let session = Session::new();
    assert_eq!(
        session.state(),
        &SessionState::Form {
            topic: Topic::MentalHealth,
            validation_error: None
        }
    );
    assert_eq!(session.blank_form(), FormData::defaults(Topic::MentalHealth));
}

#[test]
fn empty_name_never_reaches_loading() {
    let mut session = Session::new();
    let result = session.submit(named_form(Topic::MentalHealth, "  "));

    assert!(matches!(result, Err(SessionError::Validation(_))));
    assert_eq!(session.state().kind(), StateKind::Form);
    assert_eq!(session.state().error_message(), Some(NAME_REQUIRED_MESSAGE));
}

#[test]
fn valid_submission_enters_loading_and_blocks_second_submit() {
    let mut session = Session::new();
    let request = session
        .submit(named_form(Topic::MentalHealth, "Ana"))
        .unwrap();

    assert_eq!(
        session.state(),
        &SessionState::Loading {
            request_id: request.id(),
            topic: Topic::MentalHealth,
            user_name: "Ana".to_string(),
        }
    );

    let second = session.submit(named_form(Topic::MentalHealth, "Ana"));
    assert!(matches!(
        second,
        Err(SessionError::InvalidTransition {
            state: StateKind::Loading,
            ..
        })
    ));
    assert!(matches!(session.state(), SessionState::Loading { request_id, .. } if *request_id == request.id()));
}

#[test]
fn failure_becomes_generic_error_message() {
    let mut session = Session::new();
    let request = session.submit(named_form(Topic::Sleep, "Ana")).err();
    assert!(matches!(request, Some(SessionError::TopicMismatch { .. })));

    session.select_topic(Topic::Sleep).unwrap();
    let request = session.submit(named_form(Topic::Sleep, "Ana")).unwrap();
    session.complete(request.id(), Err(GenerationFailed)).unwrap();

    assert_eq!(
        session.state(),
        &SessionState::Error {
            topic: Topic::Sleep,
            message: GENERATION_FAILED_MESSAGE.to_string(),
        }
    );
    assert_eq!(session.state().user_name(), "");
    assert_eq!(session.state().report_content(), None);
}

#[test]
fn stale_completion_is_rejected() {
    let mut session = Session::new();
    let first = session.submit(named_form(Topic::MentalHealth, "Ana")).unwrap();
    session.reset();
    let second = session.submit(named_form(Topic::MentalHealth, "Ana")).unwrap();

    let stale = session.complete(first.id(), Ok("late".to_string()));
    assert!(matches!(stale, Err(SessionError::StaleCompletion(_))));
    assert_eq!(session.state().kind(), StateKind::Loading);

    session.complete(second.id(), Ok("ok".to_string())).unwrap();
    assert_eq!(session.state().report_content(), Some("ok"));
}

#[test]
fn completion_outside_loading_is_rejected() {
    let mut session = Session::new();
    let result = session.complete(uuid::Uuid::new_v4(), Ok(String::new()));
    assert!(matches!(
        result,
        Err(SessionError::InvalidTransition {
            state: StateKind::Form,
            ..
        })
    ));
}

#[test]
fn reset_clears_report_and_error() {
    let mut session = Session::new();
    session.select_topic(Topic::Activity).unwrap();
    let request = session.submit(named_form(Topic::Activity, "Rui")).unwrap();
    session.complete(request.id(), Ok("texto".to_string())).unwrap();
    assert_eq!(session.state().kind(), StateKind::Report);

    session.reset();
    assert_eq!(session.state(), &SessionState::initial());
    assert_eq!(session.state().user_name(), "");
    assert_eq!(session.state().report_content(), None);
    assert_eq!(session.state().error_message(), None);

    session.select_topic(Topic::Diet).unwrap();
    let request = session.submit(named_form(Topic::Diet, "Rui")).unwrap();
    session.complete(request.id(), Err(GenerationFailed)).unwrap();
    session.reset();
    assert_eq!(session.state(), &SessionState::initial());
    assert_eq!(session.topic(), Topic::MentalHealth);
}

#[test]
fn topic_changes_only_in_form() {
    let mut session = Session::new();
    session.select_topic(Topic::Diet).unwrap();
    assert_eq!(session.blank_form(), FormData::defaults(Topic::Diet));

    session.submit(named_form(Topic::Diet, "Ana")).unwrap();
    assert!(session.select_topic(Topic::Sleep).is_err());
    assert_eq!(session.topic(), Topic::Diet);
    assert_eq!(session.state().kind(), StateKind::Loading);
}

#[test]
fn selecting_topic_clears_validation_message() {
    let mut session = Session::new();
    let _ = session.submit(named_form(Topic::MentalHealth, ""));
    assert!(session.state().error_message().is_some());

    session.select_topic(Topic::Sleep).unwrap();
    assert_eq!(session.state().error_message(), None);
}

#[test]
fn export_target_only_in_report() {
    let mut session = Session::new();
    assert_eq!(session.export_target(), None);

    let request = session.submit(named_form(Topic::MentalHealth, "Ana")).unwrap();
    assert_eq!(session.export_target(), None);

    session.complete(request.id(), Ok("**Relatório**".to_string())).unwrap();
    let target = session.export_target().unwrap();
    assert_eq!(target.topic, Topic::MentalHealth);
    assert_eq!(target.user_name, "Ana");
    assert_eq!(target.content, "Relatório");
}

#[tokio::test]
async fn diet_scenario_produces_sanitized_report() {
    let client = ScriptedClient::replying(Ok("**Oi Ana**".to_string()));
    let mut session = Session::new();
    session.select_topic(Topic::Diet).unwrap();

    let mut form = session.blank_form();
    form.set_name("Ana");
    if let FormData::Diet(diet) = &mut form {
        diet.meals_per_day = "3".to_string();
    }

    let state = session.generate(&client, form).await.unwrap();
    assert_eq!(
        state,
        &SessionState::Report {
            topic: Topic::Diet,
            user_name: "Ana".to_string(),
            content: "Oi Ana".to_string(),
        }
    );
    assert_eq!(client.calls(), 1);
    assert!(client.prompts.lock().unwrap()[0].contains("- Refeições completas por dia: 3"));
}

#[tokio::test]
async fn empty_generation_is_an_empty_report() {
    let client = ScriptedClient::replying(Ok(String::new()));
    let mut session = Session::new();

    session
        .generate(&client, named_form(Topic::MentalHealth, "Ana"))
        .await
        .unwrap();
    assert_eq!(session.state().report_content(), Some(""));
}

#[tokio::test]
async fn failed_generation_settles_in_error() {
    let client = ScriptedClient::replying(Err(GenerationFailed));
    let mut session = Session::new();

    let state = session
        .generate(&client, named_form(Topic::MentalHealth, "Ana"))
        .await
        .unwrap();
    assert_eq!(state.error_message(), Some(GENERATION_FAILED_MESSAGE));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn blocked_submission_makes_no_call() {
    let client = ScriptedClient::replying(Ok("never".to_string()));
    let mut session = Session::new();

    let result = session
        .generate(&client, named_form(Topic::MentalHealth, ""))
        .await;
    assert!(matches!(result, Err(SessionError::Validation(_))));
    assert_eq!(client.calls(), 0);
}
