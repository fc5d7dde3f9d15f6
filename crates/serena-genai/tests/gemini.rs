use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use serena_genai::client::ReportClient;
use serena_genai::error::{GenaiError, GenerationFailed};
use serena_genai::gemini::GeminiClient;

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_base_url(server.uri(), "test-key", MODEL).unwrap()
}

#[tokio::test]
async fn returns_joined_text_of_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({ "contents": [{ "parts": [{ "text": "olá" }] }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "**Oi** " }, { "text": "Ana" }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 4 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server).generate("olá").await.unwrap();
    assert_eq!(text, "**Oi** Ana");
}

#[tokio::test]
async fn missing_text_is_an_empty_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client(&server).generate("prompt").await, Ok(String::new()));
}

#[tokio::test]
async fn unauthorized_is_reported_as_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        })))
        .mount(&server)
        .await;

    let gemini = client(&server);
    match gemini.send("prompt").await {
        Err(GenaiError::Authentication(message)) => assert_eq!(message, "API key not valid"),
        other => panic!("expected authentication error, got {other:?}"),
    }
    assert_eq!(gemini.generate("prompt").await, Err(GenerationFailed));
}

#[tokio::test]
async fn missing_credentials_fail_opaquely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client(&server).generate("prompt").await, Err(GenerationFailed));
}

#[tokio::test]
async fn server_error_is_opaque_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client(&server).generate("prompt").await, Err(GenerationFailed));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(matches!(
        client(&server).send("prompt").await,
        Err(GenaiError::ResponseParse(_))
    ));
}

#[test]
fn empty_api_key_is_rejected() {
    assert!(matches!(
        GeminiClient::new("  ", MODEL),
        Err(GenaiError::Config(_))
    ));
}

#[test]
fn reports_its_model() {
    let gemini = GeminiClient::new("key", "gemini-2.5-pro").unwrap();
    assert_eq!(gemini.model(), "gemini-2.5-pro");
}
