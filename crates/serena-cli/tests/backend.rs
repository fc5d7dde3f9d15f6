use serena_cli::backend::Backend;
use serena_cli::config::{ProviderConfig, SerenaConfig};
use serena_genai::client::ReportClient;

#[tokio::test]
async fn gemini_backend_requires_a_key() {
    let err = match Backend::from_config(&SerenaConfig::default(), None).await {
        Ok(_) => panic!("backend built without a key"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn gemini_backend_uses_configured_model() {
    let config = SerenaConfig {
        model: "gemini-2.0-flash".to_string(),
        ..SerenaConfig::default()
    };
    let backend = Backend::from_config(&config, Some("test-key")).await.unwrap();
    assert!(matches!(backend, Backend::Gemini(_)));
    assert_eq!(backend.model(), "gemini-2.0-flash");
}

#[tokio::test]
async fn bedrock_backend_needs_no_api_key() {
    let config = SerenaConfig {
        provider: ProviderConfig::Bedrock {
            region: "us-east-1".to_string(),
        },
        model: "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string(),
        ..SerenaConfig::default()
    };
    let backend = Backend::from_config(&config, None).await.unwrap();
    assert!(matches!(backend, Backend::Bedrock(_)));
    assert_eq!(backend.model(), "us.anthropic.claude-sonnet-4-20250514-v1:0");
}
