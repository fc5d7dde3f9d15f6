//! The configured report backend.

use serena_genai::bedrock::BedrockClient;
use serena_genai::client::{ReportClient, ReportResult};
use serena_genai::gemini::GeminiClient;

use crate::config::{API_KEY_VARS, ProviderConfig, SerenaConfig};

pub enum Backend {
    Gemini(GeminiClient),
    Bedrock(BedrockClient),
}

impl Backend {
    /// Build the client named by `config`. Gemini needs `api_key`; Bedrock
    /// uses the AWS default credential chain.
    pub async fn from_config(config: &SerenaConfig, api_key: Option<&str>) -> eyre::Result<Self> {
        let backend = match &config.provider {
            ProviderConfig::Gemini => {
                let key = api_key.ok_or_else(|| {
                    eyre::eyre!("no API key found; set {} (or {})", API_KEY_VARS[0], API_KEY_VARS[1])
                })?;
                Backend::Gemini(GeminiClient::new(key, &config.model)?)
            }
            ProviderConfig::Bedrock { region } => {
                Backend::Bedrock(BedrockClient::from_region(region, &config.model).await)
            }
        };
        tracing::debug!(model = backend.model(), "report backend ready");
        Ok(backend)
    }
}

impl ReportClient for Backend {
    fn model(&self) -> &str {
        match self {
            Backend::Gemini(client) => client.model(),
            Backend::Bedrock(client) => client.model(),
        }
    }

    async fn generate(&self, prompt: &str) -> ReportResult {
        match self {
            Backend::Gemini(client) => client.generate(prompt).await,
            Backend::Bedrock(client) => client.generate(prompt).await,
        }
    }
}
